#[macro_export]
macro_rules! optlist {
    // Entry with an argument: tag => value
    (@entry $tag:expr => $arg:expr) => {
        $crate::Entry::with_arg($tag, $arg)
    };

    // Flag-only entry
    (@entry $tag:expr) => {
        $crate::Entry::new($tag)
    };

    // Handle empty list
    () => {
        $crate::OptList::new()
    };

    // Comma-separated entries, each either `tag` or `tag => arg`
    ($($tag:expr $(=> $arg:expr)?),+ $(,)?) => {
        $crate::OptList::from(::std::vec![
            $($crate::optlist!(@entry $tag $(=> $arg)?)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::{to_string, Entry, OptList};

    #[test]
    fn test_optlist_macro_empty() {
        assert_eq!(optlist![], OptList::new());
    }

    #[test]
    fn test_optlist_macro_flags() {
        let opts = optlist!["bold", "underlined"];
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[0], Entry::new("bold"));
        assert_eq!(opts[1], Entry::new("underlined"));
    }

    #[test]
    fn test_optlist_macro_mixed() {
        let opts = optlist!["bold", "font" => "12", "typeface" => "bodoni"];
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[1], Entry::with_arg("font", "12"));
        assert_eq!(to_string(&opts, ',', Some('=')), "bold,font=12,typeface=bodoni");
    }

    #[test]
    fn test_optlist_macro_trailing_comma() {
        let opts = optlist!["a", "b" => "1",];
        assert_eq!(opts.len(), 2);
    }
}
