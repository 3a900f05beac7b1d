// src/macros.rs

/// Owned `String` from anything `String: From` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    #[test]
    fn owned_strings_from_text_and_chars() {
        assert!(s!().is_empty());
        assert_eq!(s!("riz"), "riz");
        assert_eq!(s!('x'), "x");
        assert_eq!(s!(Cow::Borrowed("sel")), "sel");
    }
}
