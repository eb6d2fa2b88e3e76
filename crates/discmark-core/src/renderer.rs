//! Token-to-HTML renderer.
//!
//! Every token is resolved concurrently: mention lookups are started
//! together and their results joined in token order, so a slow early lookup
//! never lets a later fragment jump ahead. The first failing lookup fails the
//! whole render and the remaining lookups are dropped.

use futures::future::try_join_all;

use crate::escape::escape_html;
use crate::lookup::UserLookup;
use crate::token::Token;
use crate::tokenizer::tokenize;
use crate::Result;

/// Base URL for custom emoji images.
pub const DEFAULT_EMOJI_BASE_URL: &str = "https://cdn.discordapp.com/emojis";

/// Renders token sequences to HTML fragments.
#[derive(Debug, Clone)]
pub struct Renderer {
    emoji_base_url: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            emoji_base_url: DEFAULT_EMOJI_BASE_URL.to_string(),
        }
    }
}

impl Renderer {
    /// Creates a renderer pointing at the Discord emoji CDN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves emoji images from `url` instead of the Discord CDN.
    pub fn with_emoji_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.emoji_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The emoji image base URL, without trailing slash.
    pub fn emoji_base_url(&self) -> &str {
        &self.emoji_base_url
    }

    /// Builds the `<img>` tag for a custom emoji.
    ///
    /// `name` and `id` come from the marker grammar and are inserted as-is.
    pub fn emoji_html(&self, name: &str, id: &str) -> String {
        format!(
            r#"<img src="{}/{id}.png" alt="{name}">"#,
            self.emoji_base_url
        )
    }

    /// Renders `tokens` in order, resolving mentions through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `lookup`. No partial output is
    /// produced.
    pub async fn render<L>(&self, tokens: &[Token], lookup: &L) -> Result<String>
    where
        L: UserLookup + ?Sized,
    {
        let mentions = tokens.iter().filter(|t| t.is_mention()).count();
        log::debug!(
            "rendering {} tokens ({} mentions)",
            tokens.len(),
            mentions
        );

        let fragments =
            try_join_all(tokens.iter().map(|token| self.render_token(token, lookup))).await?;
        Ok(fragments.concat())
    }

    /// Tokenizes and renders a raw message.
    pub async fn render_message<L>(&self, input: &str, lookup: &L) -> Result<String>
    where
        L: UserLookup + ?Sized,
    {
        let tokens = tokenize(input);
        self.render(&tokens, lookup).await
    }

    async fn render_token<L>(&self, token: &Token, lookup: &L) -> Result<String>
    where
        L: UserLookup + ?Sized,
    {
        match token {
            Token::Text { content } => Ok(escape_html(content)),
            Token::Emoji { name, id } => Ok(self.emoji_html(name, id)),
            Token::Mention { id } => {
                let name = lookup.lookup_user_name(id).await?;
                Ok(format!("@{name}"))
            }
        }
    }
}

/// Renders `tokens` with the default [`Renderer`].
pub async fn render<L>(tokens: &[Token], lookup: &L) -> Result<String>
where
    L: UserLookup + ?Sized,
{
    Renderer::default().render(tokens, lookup).await
}

/// Converts a raw Discord message to HTML with the default [`Renderer`].
///
/// # Example
///
/// ```
/// use discmark_core::lookup::MockLookup;
/// use discmark_core::parse_message;
///
/// # futures::executor::block_on(async {
/// let lookup = MockLookup::new().with_user("42", "ada");
/// let html = parse_message("<b>hi</b> <@42>", &lookup).await.unwrap();
/// assert_eq!(html, "&lt;b&gt;hi&lt;/b&gt; @ada");
/// # });
/// ```
pub async fn parse_message<L>(input: &str, lookup: &L) -> Result<String>
where
    L: UserLookup + ?Sized,
{
    Renderer::default().render_message(input, lookup).await
}
