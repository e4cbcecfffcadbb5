// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand.

    // No args → empty String
    () => {
        ::std::string::String::new()
    };
    // Single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenation shorthand for &str/String pieces.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
