use crate::api::ApiError;
use leptos::*;

fn validation_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn visible_code(error: &ApiError) -> Option<String> {
    match error.code.as_str() {
        "" | "UNKNOWN" | "VALIDATION_ERROR" => None,
        code => Some(code.to_string()),
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let Some(err) = error.get() else {
                        return ().into_view();
                    };
                    let messages = validation_messages(&err);
                    if !messages.is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view();
                    }
                    match visible_code(&err) {
                        Some(code) => view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> }.into_view(),
                        None => ().into_view(),
                    }
                }}
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Client name is required", "Email is invalid"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Client name is required"));
        assert!(html.contains("Email is invalid"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Request failed")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("REQUEST_FAILED"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
