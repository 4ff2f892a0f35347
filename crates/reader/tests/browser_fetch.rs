// ABOUTME: Integration tests for the rendered browser fetcher.
// ABOUTME: Ignored by default because they require a local Chrome/Chromium install.

use std::time::Duration;

use httpmock::prelude::*;
use lectern_reader::{FetchStrategy, Reader};

fn rendered_reader(timeout: Duration) -> Reader {
    Reader::builder()
        .fetch_strategy(FetchStrategy::Rendered)
        .allow_private_networks(true)
        .timeout(timeout)
        .build()
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium install"]
async fn rendered_fetch_captures_script_generated_content() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/spa");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                r#"<html><head><title>Rendered Page</title></head><body>
                <div id="app"></div>
                <script>
                document.getElementById('app').innerHTML =
                  '<article><p>Client rendered paragraph with plenty of words, commas, and detail for scoring.</p>' +
                  '<p>Another client rendered paragraph that fills out the article body with more prose.</p></article>';
                </script>
                </body></html>"#,
            );
    });

    let article = rendered_reader(Duration::from_secs(30))
        .read(&server.url("/spa"))
        .await
        .expect("rendered fetch should capture script output");

    assert_eq!(article.title, "Rendered Page");
    assert!(article.content.contains("Client rendered paragraph"));
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium install"]
async fn browser_is_released_after_navigation_failure() {
    // Nothing listens on this port; navigation fails, and the fetch must
    // still return (rather than hang on a leaked browser instance).
    let reader = rendered_reader(Duration::from_secs(30));
    let err = reader
        .read("http://127.0.0.1:9/unreachable")
        .await
        .expect_err("navigation to a closed port should fail");

    assert!(err.is_fetch() || err.is_timeout());

    // A second fetch after the failure proves the pipeline is still usable
    // and the previous instance was torn down.
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                r#"<html><head><title>Recovered</title></head><body><article>
                <p>A follow-up fetch succeeds with a fresh browser instance, proving cleanup happened.</p>
                <p>The second paragraph provides the extractor with enough material to work with.</p>
                </article></body></html>"#,
            );
    });

    let article = reader.read(&server.url("/ok")).await.unwrap();
    assert_eq!(article.title, "Recovered");
}
