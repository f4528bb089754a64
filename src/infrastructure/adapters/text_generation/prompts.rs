//! 提示词构造
//!
//! 续写只取正文末尾的上下文，摘要只取章节开头，均按字符截断

/// 续写时保留的末尾上下文字符数
pub const CONTINUATION_CONTEXT_CHARS: usize = 4000;

/// 摘要时读取的章节开头字符数
pub const SUMMARY_INPUT_CHARS: usize = 8000;

/// 取末尾 `n` 个字符
pub fn tail_chars(text: &str, n: usize) -> &str {
    let total = text.chars().count();
    if total <= n {
        return text;
    }
    match text.char_indices().nth(total - n) {
        Some((index, _)) => &text[index..],
        None => text,
    }
}

/// 取开头 `n` 个字符
pub fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

pub fn synopsis_prompt(title: &str, genre: &str) -> String {
    format!(
        "Write a compelling, concise synopsis of at most 100 words for a {genre} novel \
         titled \"{title}\". Keep the tone engaging."
    )
}

pub fn continuation_prompt(prior_text: &str, title: &str) -> String {
    let context = tail_chars(prior_text, CONTINUATION_CONTEXT_CHARS);
    format!(
        "You are co-writing the novel \"{title}\". Continue the story naturally from the \
         text below, keeping its tone and style. Write roughly 200 to 300 words.\n\n\
         Text:\n{context}"
    )
}

pub fn summary_prompt(chapter_text: &str) -> String {
    let content = head_chars(chapter_text, SUMMARY_INPUT_CHARS);
    format!(
        "Summarize this novel chapter in 3 bullet points. Capture its essence and avoid \
         major spoilers where possible.\n\nChapter:\n{content}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_and_head_respect_char_boundaries() {
        let text = "星辰大海abc";
        assert_eq!(tail_chars(text, 3), "abc");
        assert_eq!(tail_chars(text, 4), "海abc");
        assert_eq!(tail_chars(text, 5), "大海abc");
        assert_eq!(tail_chars(text, 100), text);
        assert_eq!(head_chars(text, 2), "星辰");
        assert_eq!(head_chars(text, 100), text);
        assert_eq!(head_chars(text, 0), "");
    }

    #[test]
    fn test_continuation_prompt_uses_tail_context() {
        let prior = format!("{}{}", "a".repeat(5000), "THE END");
        let prompt = continuation_prompt(&prior, "Starship");
        assert!(prompt.contains("\"Starship\""));
        assert!(prompt.ends_with("THE END"));
        assert!(prompt.matches('a').count() < 4100);
    }

    #[test]
    fn test_summary_prompt_truncates_input() {
        let chapter = format!("BEGIN{}", "字".repeat(9000));
        let prompt = summary_prompt(&chapter);
        assert!(prompt.contains("BEGIN"));
        assert_eq!(prompt.matches('字').count(), SUMMARY_INPUT_CHARS - 5);
    }
}
