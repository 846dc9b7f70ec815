/// Case folding shared by keywords and catalog values.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Turns extracted keywords into the folded sub-tokens the filters match on.
/// Blank keywords contribute nothing; repeated sub-tokens are kept once, in first-seen order.
pub fn sub_tokens<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            continue;
        }
        for part in keyword.split_whitespace() {
            let token = fold(part);
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }

    tokens
}
