//! Welcome message template rendering.
//!
//! Templates carry placeholder tokens: `{user}` (mention), `{username}`
//! (plain name) and `{guild}` (guild display name).

/// Renders a welcome template for a joining member.
pub fn render(template: &str, mention: &str, username: &str, guild_name: &str) -> String {
    template
        .replace("{user}", mention)
        .replace("{username}", username)
        .replace("{guild}", guild_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_all_placeholder_tokens() {
        let rendered = render(
            "Welcome {user} ({username}) to {guild}!",
            "<@123>",
            "newbie",
            "The Guild",
        );

        assert_eq!(rendered, "Welcome <@123> (newbie) to The Guild!");
    }

    #[test]
    fn repeated_tokens_are_all_replaced() {
        assert_eq!(render("{user} {user}", "<@1>", "a", "g"), "<@1> <@1>");
    }

    #[test]
    fn templates_without_tokens_pass_through() {
        assert_eq!(render("Hello there", "<@1>", "a", "g"), "Hello there");
    }
}
