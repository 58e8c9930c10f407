use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split a comma-separated field into its entries: trim each segment,
/// drop empty ones, preserve order.
pub fn split_list_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_field_trims_and_drops_empty() {
        assert_eq!(
            split_list_field("Cafes, , Bakeries ,  "),
            vec!["Cafes".to_string(), "Bakeries".to_string()]
        );
    }

    #[test]
    fn test_split_list_field_preserves_order() {
        assert_eq!(
            split_list_field("Gyms,Cafes, Salons"),
            vec!["Gyms".to_string(), "Cafes".to_string(), "Salons".to_string()]
        );
    }

    #[test]
    fn test_split_list_field_empty_input() {
        assert!(split_list_field("").is_empty());
        assert!(split_list_field(" , ,, ").is_empty());
    }

    #[test]
    fn test_split_list_field_single_entry() {
        assert_eq!(split_list_field("  Cafes  "), vec!["Cafes".to_string()]);
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text_unicode("Hello", 10), "Hello");
        assert_eq!(truncate_text_unicode("Hello World!", 8), "Hello...");
        assert_eq!(truncate_text_unicode("", 5), "");
    }
}
