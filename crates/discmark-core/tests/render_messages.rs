//! End-to-end rendering through the public API.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use discmark_core::lookup::{
    CachedLookup, FallbackLookup, MockLookup, RetryLookup, UserDirectory, UserProfile,
};
use discmark_core::{Error, Renderer, Token, UserLookup, parse_message, render, tokenize};

fn directory() -> UserDirectory {
    UserDirectory::new()
        .with_user(
            "270063754576789504",
            UserProfile::new("crutchcorn").with_display_name("Corbin Crutchley"),
        )
        .with_user("1", UserProfile::new("ada"))
}

#[tokio::test]
async fn test_full_message_with_directory() {
    let html = parse_message(
        "<@270063754576789504> reacted <:shrugging:519267805871341568> to \"<b>\" & <@1>",
        &directory(),
    )
    .await
    .unwrap();

    assert_eq!(
        html,
        "@crutchcorn (Corbin Crutchley) reacted \
         <img src=\"https://cdn.discordapp.com/emojis/519267805871341568.png\" alt=\"shrugging\"> \
         to &quot;&lt;b&gt;&quot; &amp; @ada"
    );
}

#[tokio::test]
async fn test_unknown_user_fails_render() {
    let err = parse_message("hi <@999>", &directory()).await.unwrap_err();
    assert!(matches!(err, Error::UserNotFound(ref id) if id == "999"));
}

#[tokio::test]
async fn test_unknown_user_with_fallback() {
    let lookup = FallbackLookup::new(directory());
    let html = parse_message("hi <@999>", &lookup).await.unwrap();
    assert_eq!(html, "hi @Unknown User");
}

#[tokio::test]
async fn test_empty_message() {
    assert!(tokenize("").is_empty());
    assert_eq!(parse_message("", &directory()).await.unwrap(), "");
}

#[tokio::test]
async fn test_tokens_rendered_directly() {
    let tokens = vec![
        Token::text("x "),
        Token::emoji("wave", "5"),
        Token::mention("1"),
    ];
    let html = render(&tokens, &directory()).await.unwrap();
    assert_eq!(
        html,
        r#"x <img src="https://cdn.discordapp.com/emojis/5.png" alt="wave">@ada"#
    );
}

#[tokio::test(start_paused = true)]
async fn test_shared_cached_lookup_across_concurrent_renders() {
    let mock = MockLookup::new()
        .with_user("1", "ada")
        .with_delay("1", Duration::from_millis(50));
    let lookup = Arc::new(CachedLookup::new(mock.clone()));

    let first = parse_message("<@1>", &lookup).await.unwrap();

    let renderer = Renderer::new();
    let (a, b) = tokio::join!(
        renderer.render_message("a <@1>", lookup.as_ref()),
        renderer.render_message("b <@1>", lookup.as_ref()),
    );

    assert_eq!(first, "@ada");
    assert_eq!(a.unwrap(), "a @ada");
    assert_eq!(b.unwrap(), "b @ada");
    assert_eq!(mock.call_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_resilient_stack_retries_then_falls_back() {
    let flaky = MockLookup::new()
        .with_user("1", "ada")
        .with_transient_failures("1", 1)
        .with_failure("2");
    let retry: Arc<dyn UserLookup> = Arc::new(RetryLookup::new(Arc::new(flaky.clone())));
    let lookup = FallbackLookup::with_name(retry, "someone");

    let html = parse_message("<@2> pinged <@1>", &lookup).await.unwrap();

    assert_eq!(html, "@someone pinged @ada");
    assert_eq!(flaky.calls().await.iter().filter(|id| *id == "1").count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_later_mention_resolving_first_keeps_order() {
    let lookup = MockLookup::new()
        .with_user("a", "alpha")
        .with_user("b", "beta")
        .with_user("c", "gamma")
        .with_delay("a", Duration::from_millis(300))
        .with_delay("b", Duration::from_millis(200))
        .with_delay("c", Duration::from_millis(100));

    let html = parse_message("1:<@a> 2:<@b> 3:<@c>", &lookup).await.unwrap();

    assert_eq!(html, "1:@alpha 2:@beta 3:@gamma");
}
