//! Browser control.
//!
//! Real browser control goes through the Chrome DevTools Protocol. When
//! compiled with the `browser` feature this module drives a headless
//! Chromium via chromiumoxide; without the feature it provides a scriptable
//! in-memory session so page objects and the runner are unit testable
//! without a browser.
//!
//! Both implementations expose the same [`Session`] surface: navigate,
//! click, fill, select, key press, text queries, visibility, counts,
//! screenshots, and raw JavaScript evaluation. A `Session` is a cheap
//! clonable handle to one browser tab.

use crate::config::SuiteConfig;
use crate::locator::Selector;
use crate::result::{HarnessError, HarnessResult};
use crate::wait::WaitOptions;

// Query helpers compile selectors into guarded JS expressions. The mock
// answers from scripted state instead, so these are only reachable with
// the `browser` feature (tests exercise them directly).
#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn js_string(text: &str) -> String {
    // serde_json string encoding doubles as JS string escaping here
    serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn click_expr(selector: &Selector) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
        selector.to_query()
    )
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn fill_expr(selector: &Selector, text: &str) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return false; el.focus(); el.value = {}; \
         el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
         el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
        selector.to_query(),
        js_string(text)
    )
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn select_expr(selector: &Selector, value: &str) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return false; el.value = {}; \
         el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
        selector.to_query(),
        js_string(value)
    )
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn text_expr(selector: &Selector) -> String {
    format!(
        "(() => {{ const el = {}; return el ? el.textContent.trim() : null; }})()",
        selector.to_query()
    )
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn texts_expr(selector: &Selector) -> String {
    format!("{}.map(el => el.textContent.trim())", selector.to_all_query())
}

// A navigation tears down the page's execution context, so evaluation can
// fail transiently while a wait is polling across it. Those failures mean
// "not ready yet", not "give up".
#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn retryable_while_waiting(error: &HarnessError) -> bool {
    matches!(error, HarnessError::Evaluate { .. })
}

#[cfg_attr(not(any(feature = "browser", test)), allow(dead_code))]
fn visible_expr(selector: &Selector) -> String {
    format!(
        "(() => {{ const el = {}; if (!el) return false; \
         const style = window.getComputedStyle(el); \
         return style.display !== 'none' && style.visibility !== 'hidden' \
             && el.getClientRects().length > 0; }})()",
        selector.to_query()
    )
}

// ============================================================================
// Real CDP Implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{
        click_expr, fill_expr, retryable_while_waiting, select_expr, text_expr, texts_expr,
        visible_expr, HarnessError, HarnessResult, Selector, SuiteConfig, WaitOptions,
    };
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::input::{
        DispatchKeyEventParams, DispatchKeyEventType,
    };
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::sync::Mutex;

    /// Browser instance with a real CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: SuiteConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser per the suite configuration
        pub async fn launch(config: &SuiteConfig) -> HarnessResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }
            if !config.sandbox {
                builder = builder.no_sandbox();
            }
            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| HarnessError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| HarnessError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Drain CDP events until the connection drops
            let handle = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            tracing::debug!(headless = config.headless, "browser launched");

            Ok(Self {
                config: config.clone(),
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Open a new tab as a [`Session`]
        pub async fn new_session(&self) -> HarnessResult<Session> {
            let browser = self.inner.lock().await;
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| HarnessError::Session {
                    message: e.to_string(),
                })?;

            Ok(Session {
                page: Arc::new(Mutex::new(page)),
                default_wait_ms: self.config.wait_timeout_ms,
            })
        }

        /// Get the suite configuration
        #[must_use]
        pub const fn config(&self) -> &SuiteConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> HarnessResult<()> {
            let mut browser = self.inner.lock().await;
            browser
                .close()
                .await
                .map_err(|e| HarnessError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// One browser tab, exclusively owned by one scenario
    #[derive(Debug, Clone)]
    pub struct Session {
        page: Arc<Mutex<CdpPage>>,
        default_wait_ms: u64,
    }

    impl Session {
        async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> HarnessResult<T> {
            let page = self.page.lock().await;
            let result = page
                .evaluate(expr)
                .await
                .map_err(|e| HarnessError::Evaluate {
                    message: e.to_string(),
                })?;
            result.into_value().map_err(|e| HarnessError::Evaluate {
                message: e.to_string(),
            })
        }

        /// Navigate to a URL and wait for the load event
        pub async fn goto(&self, url: &str) -> HarnessResult<()> {
            tracing::debug!(url, "navigating");
            let page = self.page.lock().await;
            page.goto(url).await.map_err(|e| HarnessError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Current page URL
        pub async fn current_url(&self) -> HarnessResult<String> {
            self.eval("window.location.href").await
        }

        /// Click the first element matching the selector
        pub async fn click(&self, selector: &Selector) -> HarnessResult<()> {
            tracing::trace!(%selector, "click");
            let clicked: bool = self.eval(&click_expr(selector)).await?;
            if clicked {
                Ok(())
            } else {
                Err(HarnessError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// Fill an input element, firing input/change events
        pub async fn fill(&self, selector: &Selector, text: &str) -> HarnessResult<()> {
            tracing::trace!(%selector, "fill");
            let filled: bool = self.eval(&fill_expr(selector, text)).await?;
            if filled {
                Ok(())
            } else {
                Err(HarnessError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// Select an option on a `<select>` element by its value
        pub async fn select_option(&self, selector: &Selector, value: &str) -> HarnessResult<()> {
            tracing::trace!(%selector, value, "select option");
            let selected: bool = self.eval(&select_expr(selector, value)).await?;
            if selected {
                Ok(())
            } else {
                Err(HarnessError::ElementNotFound {
                    selector: selector.to_string(),
                })
            }
        }

        /// Dispatch a key press (down + up) to the focused element
        pub async fn press_key(&self, key: &str) -> HarnessResult<()> {
            let page = self.page.lock().await;
            for event_type in [DispatchKeyEventType::KeyDown, DispatchKeyEventType::KeyUp] {
                let params = DispatchKeyEventParams::builder()
                    .r#type(event_type)
                    .key(key)
                    .build()
                    .map_err(|e| HarnessError::Input {
                        message: e.to_string(),
                    })?;
                page.execute(params)
                    .await
                    .map_err(|e| HarnessError::Input {
                        message: e.to_string(),
                    })?;
            }
            Ok(())
        }

        /// Trimmed text content of the first matching element
        pub async fn text(&self, selector: &Selector) -> HarnessResult<String> {
            let text: Option<String> = self.eval(&text_expr(selector)).await?;
            text.ok_or_else(|| HarnessError::ElementNotFound {
                selector: selector.to_string(),
            })
        }

        /// Trimmed text content of all matching elements, in DOM order
        pub async fn texts(&self, selector: &Selector) -> HarnessResult<Vec<String>> {
            self.eval(&texts_expr(selector)).await
        }

        /// Whether the first matching element exists and is rendered
        pub async fn is_visible(&self, selector: &Selector) -> HarnessResult<bool> {
            self.eval(&visible_expr(selector)).await
        }

        /// Number of matching elements
        pub async fn count(&self, selector: &Selector) -> HarnessResult<usize> {
            self.eval(&selector.to_count_query()).await
        }

        /// Poll until the selector is visible, or time out
        pub async fn wait_for(
            &self,
            selector: &Selector,
            options: &WaitOptions,
        ) -> HarnessResult<()> {
            let start = Instant::now();
            loop {
                match self.is_visible(selector).await {
                    Ok(true) => return Ok(()),
                    Ok(false) => {}
                    Err(e) if retryable_while_waiting(&e) => {}
                    Err(e) => return Err(e),
                }
                if start.elapsed() >= options.timeout() {
                    return Err(HarnessError::Timeout {
                        ms: options.timeout_ms,
                        selector: selector.to_string(),
                    });
                }
                tokio::time::sleep(options.poll_interval()).await;
            }
        }

        /// Wait for the selector with the session's default timeout
        pub async fn wait_for_default(&self, selector: &Selector) -> HarnessResult<()> {
            let options = WaitOptions::new().with_timeout(self.default_wait_ms);
            self.wait_for(selector, &options).await
        }

        /// Evaluate a JavaScript expression; promises are awaited
        pub async fn evaluate(&self, expr: &str) -> HarnessResult<serde_json::Value> {
            self.eval(expr).await
        }

        /// Capture a PNG screenshot of the current viewport
        pub async fn screenshot(&self) -> HarnessResult<Vec<u8>> {
            let page = self.page.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let shot = page
                .execute(params)
                .await
                .map_err(|e| HarnessError::Screenshot {
                    message: e.to_string(),
                })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&shot.data)
                .map_err(|e| HarnessError::Screenshot {
                    message: e.to_string(),
                })
        }
    }
}

// ============================================================================
// Scriptable Mock (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use super::{HarnessError, HarnessResult, Selector, SuiteConfig, WaitOptions};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    /// PNG file signature, so mock screenshots are recognizable on disk
    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[derive(Debug, Default, Clone)]
    struct MockElement {
        texts: Vec<String>,
        visible: bool,
    }

    #[derive(Debug, Default)]
    struct MockState {
        elements: HashMap<String, MockElement>,
        clicks: Vec<String>,
        fills: Vec<(String, String)>,
        selections: Vec<(String, String)>,
        keys: Vec<String>,
        visited: Vec<String>,
        eval_result: Option<serde_json::Value>,
    }

    /// Browser instance (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Browser {
        config: SuiteConfig,
    }

    impl Browser {
        /// Launch a mock browser
        pub async fn launch(config: &SuiteConfig) -> HarnessResult<Self> {
            Ok(Self {
                config: config.clone(),
            })
        }

        /// Open a new mock session
        pub async fn new_session(&self) -> HarnessResult<Session> {
            Ok(Session {
                state: Arc::new(Mutex::new(MockState::default())),
                default_wait_ms: self.config.wait_timeout_ms,
            })
        }

        /// Get the suite configuration
        #[must_use]
        pub const fn config(&self) -> &SuiteConfig {
            &self.config
        }

        /// Close the mock browser
        pub async fn close(self) -> HarnessResult<()> {
            Ok(())
        }
    }

    /// One scriptable tab, exclusively owned by one scenario.
    ///
    /// Actions (click, fill, select, key press, navigation) are recorded;
    /// queries (text, visibility, count) answer from elements scripted via
    /// [`Session::set_texts`] and friends. Waits resolve immediately.
    #[derive(Debug, Clone)]
    pub struct Session {
        state: Arc<Mutex<MockState>>,
        default_wait_ms: u64,
    }

    impl Session {
        fn lock(&self) -> MutexGuard<'_, MockState> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Navigate to a URL (recorded)
        pub async fn goto(&self, url: &str) -> HarnessResult<()> {
            self.lock().visited.push(url.to_string());
            Ok(())
        }

        /// Current page URL (last navigation)
        pub async fn current_url(&self) -> HarnessResult<String> {
            Ok(self
                .lock()
                .visited
                .last()
                .cloned()
                .unwrap_or_else(|| String::from("about:blank")))
        }

        /// Click an element (recorded)
        pub async fn click(&self, selector: &Selector) -> HarnessResult<()> {
            self.lock().clicks.push(selector.to_string());
            Ok(())
        }

        /// Fill an input (recorded)
        pub async fn fill(&self, selector: &Selector, text: &str) -> HarnessResult<()> {
            self.lock()
                .fills
                .push((selector.to_string(), text.to_string()));
            Ok(())
        }

        /// Select an option (recorded)
        pub async fn select_option(&self, selector: &Selector, value: &str) -> HarnessResult<()> {
            self.lock()
                .selections
                .push((selector.to_string(), value.to_string()));
            Ok(())
        }

        /// Press a key (recorded)
        pub async fn press_key(&self, key: &str) -> HarnessResult<()> {
            self.lock().keys.push(key.to_string());
            Ok(())
        }

        /// Text of the first match; error if the element was not scripted
        pub async fn text(&self, selector: &Selector) -> HarnessResult<String> {
            self.lock()
                .elements
                .get(&selector.to_string())
                .and_then(|el| el.texts.first().cloned())
                .ok_or_else(|| HarnessError::ElementNotFound {
                    selector: selector.to_string(),
                })
        }

        /// Texts of all matches; empty when nothing was scripted
        pub async fn texts(&self, selector: &Selector) -> HarnessResult<Vec<String>> {
            Ok(self
                .lock()
                .elements
                .get(&selector.to_string())
                .map(|el| el.texts.clone())
                .unwrap_or_default())
        }

        /// Whether the element was scripted visible
        pub async fn is_visible(&self, selector: &Selector) -> HarnessResult<bool> {
            Ok(self
                .lock()
                .elements
                .get(&selector.to_string())
                .is_some_and(|el| el.visible))
        }

        /// Number of scripted matches
        pub async fn count(&self, selector: &Selector) -> HarnessResult<usize> {
            Ok(self
                .lock()
                .elements
                .get(&selector.to_string())
                .map_or(0, |el| el.texts.len()))
        }

        /// Check visibility once; no polling in the mock
        pub async fn wait_for(
            &self,
            selector: &Selector,
            options: &WaitOptions,
        ) -> HarnessResult<()> {
            if self.is_visible(selector).await? {
                Ok(())
            } else {
                Err(HarnessError::Timeout {
                    ms: options.timeout_ms,
                    selector: selector.to_string(),
                })
            }
        }

        /// Wait with the session's default timeout
        pub async fn wait_for_default(&self, selector: &Selector) -> HarnessResult<()> {
            let options = WaitOptions::new().with_timeout(self.default_wait_ms);
            self.wait_for(selector, &options).await
        }

        /// Evaluate returns the canned value, or null
        pub async fn evaluate(&self, _expr: &str) -> HarnessResult<serde_json::Value> {
            Ok(self
                .lock()
                .eval_result
                .clone()
                .unwrap_or(serde_json::Value::Null))
        }

        /// Screenshot returns a bare PNG signature
        pub async fn screenshot(&self) -> HarnessResult<Vec<u8>> {
            Ok(PNG_SIGNATURE.to_vec())
        }

        // --- scripting surface, used by unit tests ---

        /// Script an element with a list of text matches (visible)
        pub fn set_texts<I, S>(&self, selector: &Selector, texts: I)
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let element = MockElement {
                texts: texts.into_iter().map(Into::into).collect(),
                visible: true,
            };
            let _ = self.lock().elements.insert(selector.to_string(), element);
        }

        /// Script an element with a single text (visible)
        pub fn set_text(&self, selector: &Selector, text: impl Into<String>) {
            self.set_texts(selector, [text.into()]);
        }

        /// Script an element's visibility without text
        pub fn set_visible(&self, selector: &Selector, visible: bool) {
            let mut state = self.lock();
            let element = state.elements.entry(selector.to_string()).or_default();
            element.visible = visible;
        }

        /// Remove a scripted element
        pub fn remove(&self, selector: &Selector) {
            let _ = self.lock().elements.remove(&selector.to_string());
        }

        /// Set the value returned by [`Session::evaluate`]
        pub fn set_eval_result(&self, value: serde_json::Value) {
            self.lock().eval_result = Some(value);
        }

        /// Selectors clicked, in order
        #[must_use]
        pub fn clicks(&self) -> Vec<String> {
            self.lock().clicks.clone()
        }

        /// (selector, text) pairs filled, in order
        #[must_use]
        pub fn fills(&self) -> Vec<(String, String)> {
            self.lock().fills.clone()
        }

        /// (selector, value) pairs selected, in order
        #[must_use]
        pub fn selections(&self) -> Vec<(String, String)> {
            self.lock().selections.clone()
        }

        /// Keys pressed, in order
        #[must_use]
        pub fn pressed_keys(&self) -> Vec<String> {
            self.lock().keys.clone()
        }

        /// URLs navigated to, in order
        #[must_use]
        pub fn visited(&self) -> Vec<String> {
            self.lock().visited.clone()
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Session};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, Session};

#[cfg(test)]
mod expr_tests {
    use super::*;

    #[test]
    fn test_click_expr_guards_null() {
        let expr = click_expr(&Selector::css("#login-button"));
        assert!(expr.contains("if (!el) return false"));
        assert!(expr.contains("el.click()"));
    }

    #[test]
    fn test_fill_expr_escapes_text() {
        let expr = fill_expr(&Selector::css("#user-name"), "it's \"quoted\"");
        assert!(expr.contains(r#"it's \"quoted\""#));
        assert!(expr.contains("new Event('input'"));
    }

    #[test]
    fn test_select_expr_fires_change() {
        let expr = select_expr(&Selector::css(".product_sort_container"), "za");
        assert!(expr.contains("\"za\""));
        assert!(expr.contains("new Event('change'"));
    }

    #[test]
    fn test_visible_expr_checks_style() {
        let expr = visible_expr(&Selector::data_test("error"));
        assert!(expr.contains("getComputedStyle"));
        assert!(expr.contains("getClientRects"));
    }

    #[test]
    fn test_texts_expr_trims() {
        let expr = texts_expr(&Selector::css(".inventory_item_name"));
        assert!(expr.contains("map"));
        assert!(expr.contains("trim()"));
    }

    #[test]
    fn test_mid_navigation_evaluate_is_retryable() {
        let transient = HarnessError::Evaluate {
            message: "Execution context was destroyed".to_string(),
        };
        assert!(retryable_while_waiting(&transient));

        let fatal = HarnessError::Navigation {
            url: "https://www.saucedemo.com/".to_string(),
            message: "net::ERR_FAILED".to_string(),
        };
        assert!(!retryable_while_waiting(&fatal));
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod mock_tests {
    use super::*;
    use crate::config::SuiteConfig;

    async fn session() -> Session {
        let browser = Browser::launch(&SuiteConfig::default()).await.unwrap();
        browser.new_session().await.unwrap()
    }

    #[tokio::test]
    async fn test_goto_records_url() {
        let s = session().await;
        s.goto("https://www.saucedemo.com/").await.unwrap();
        assert_eq!(s.visited(), vec!["https://www.saucedemo.com/".to_string()]);
        assert_eq!(s.current_url().await.unwrap(), "https://www.saucedemo.com/");
    }

    #[tokio::test]
    async fn test_text_requires_scripting() {
        let s = session().await;
        let selector = Selector::data_test("error");
        let err = s.text(&selector).await.unwrap_err();
        assert!(matches!(err, HarnessError::ElementNotFound { .. }));

        s.set_text(&selector, "Epic sadface");
        assert_eq!(s.text(&selector).await.unwrap(), "Epic sadface");
    }

    #[tokio::test]
    async fn test_texts_and_count() {
        let s = session().await;
        let names = Selector::css(".inventory_item_name");
        s.set_texts(&names, ["Backpack", "Bike Light"]);
        assert_eq!(s.texts(&names).await.unwrap().len(), 2);
        assert_eq!(s.count(&names).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_wait_for_visible_and_timeout() {
        let s = session().await;
        let marker = Selector::css(".inventory_list");
        let opts = WaitOptions::new().with_timeout(100);

        let err = s.wait_for(&marker, &opts).await.unwrap_err();
        assert!(matches!(err, HarnessError::Timeout { ms: 100, .. }));

        s.set_visible(&marker, true);
        assert!(s.wait_for(&marker, &opts).await.is_ok());
    }

    #[tokio::test]
    async fn test_actions_recorded_in_order() {
        let s = session().await;
        s.fill(&Selector::css("#user-name"), "standard_user")
            .await
            .unwrap();
        s.click(&Selector::css("#login-button")).await.unwrap();
        s.press_key("Tab").await.unwrap();

        assert_eq!(
            s.fills(),
            vec![("#user-name".to_string(), "standard_user".to_string())]
        );
        assert_eq!(s.clicks(), vec!["#login-button".to_string()]);
        assert_eq!(s.pressed_keys(), vec!["Tab".to_string()]);
    }

    #[tokio::test]
    async fn test_evaluate_returns_canned_value() {
        let s = session().await;
        assert!(s.evaluate("1 + 1").await.unwrap().is_null());
        s.set_eval_result(serde_json::json!({"violations": []}));
        assert!(s.evaluate("axe.run()").await.unwrap().is_object());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let s = session().await;
        let clone = s.clone();
        clone.click(&Selector::css("#checkout")).await.unwrap();
        assert_eq!(s.clicks(), vec!["#checkout".to_string()]);
    }

    #[tokio::test]
    async fn test_screenshot_is_png_signature() {
        let s = session().await;
        let bytes = s.screenshot().await.unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }
}
