/// Popup UI for the clickbait checker

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use patternfly_yew::prelude::{Button, ButtonVariant};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::api::ClickbaitClient;
use crate::config::ApiConfig;
use crate::state::{decide_analysis, AnalyzeDecision, PopupAction, PopupState, RequestTokens};
use crate::ui::components::{ErrorPanel, Footer, LoadingPanel, ResultPanel, StatusIndicator};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: ApiConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(PopupState::default);
    let tokens = use_memo((), |_| RequestTokens::default());
    let client = use_memo(props.config.clone(), |config| ClickbaitClient::new(config.clone()));
    let model_info_requested = use_mut_ref(|| false);

    // Health check on mount, then on a fixed period measured from mount
    {
        let dispatcher = state.dispatcher();
        let model_info_requested = model_info_requested.clone();

        use_effect_with((*client).clone(), move |client| {
            let period_ms = client.config().health_interval_ms;
            let client = client.clone();
            let check = move || {
                spawn_health_check(client.clone(), dispatcher.clone(), model_info_requested.clone());
            };

            check();
            let interval = Interval::new(period_ms, check);

            move || drop(interval)
        });
    }

    // Analyze handler (button and Enter)
    let on_analyze = {
        let state = state.clone();
        let client = (*client).clone();
        let tokens = tokens.clone();

        Callback::from(move |_: ()| {
            let headline = match decide_analysis(&state, client.config().min_headline_chars) {
                AnalyzeDecision::Start(headline) => headline,
                AnalyzeDecision::Reject(err) => {
                    log::debug!("Headline rejected: {}", err);
                    state.dispatch(PopupAction::Rejected(err));
                    return;
                }
                AnalyzeDecision::Ignore => {
                    log::debug!("Analyze ignored while the control is disabled");
                    return;
                }
            };

            let token = tokens.issue();
            state.dispatch(PopupAction::AnalysisStarted { token });

            let dispatcher = state.dispatcher();
            let client = client.clone();
            spawn_local(async move {
                let started = js_sys::Date::now();
                let outcome = client.predict(&headline).await;

                match &outcome {
                    Ok(prediction) => log::info!(
                        "Analysis {} done in {:.0} ms (clickbait: {}, score: {})",
                        token,
                        js_sys::Date::now() - started,
                        prediction.is_clickbait,
                        prediction.score
                    ),
                    Err(err) => log::error!("Analyze error: {:?}", err),
                }

                dispatcher.dispatch(PopupAction::AnalysisFinished { token, outcome });
            });
        })
    };

    let on_click = on_analyze.reform(|_: MouseEvent| ());

    let on_keypress = {
        let on_analyze = on_analyze.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_submit_key(&e.key(), e.shift_key(), e.ctrl_key(), e.alt_key(), e.meta_key()) {
                e.prevent_default();
                on_analyze.emit(());
            }
        })
    };

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                dispatcher.dispatch(PopupAction::InputChanged(textarea.value()));
            }
        })
    };

    html! {
        <div class="popup-container">
            <h1 class="popup-title">{"🎯 Clickbait Avcısı"}</h1>

            <StatusIndicator connectivity={state.connectivity} />

            <textarea
                id="headline"
                class="headline-input"
                rows="3"
                placeholder="Haber başlığını buraya yapıştırın..."
                value={state.input.clone()}
                oninput={on_input}
                onkeypress={on_keypress}
            />

            <Button onclick={on_click} disabled={state.action_disabled()} variant={ButtonVariant::Primary} block={true}>
                {"🔍 Analiz Et"}
            </Button>

            <LoadingPanel shown={state.loading} />
            <ErrorPanel message={state.error.clone()} />
            <ResultPanel view={state.result.clone()} />

            <Footer api_version={state.api_version.clone()} model_info={state.model_info.clone()} />
        </div>
    }
}

/// Enter submits; Enter with any modifier keeps its normal textarea meaning.
pub fn is_submit_key(key: &str, shift: bool, ctrl: bool, alt: bool, meta: bool) -> bool {
    key == "Enter" && !(shift || ctrl || alt || meta)
}

// Helper functions

fn spawn_health_check(
    client: ClickbaitClient,
    dispatcher: UseReducerDispatcher<PopupState>,
    model_info_requested: Rc<RefCell<bool>>,
) {
    spawn_local(async move {
        let outcome = client.health().await;

        match &outcome {
            Ok(health) if health.model_loaded => {}
            Ok(health) => log::warn!(
                "Backend reachable but model not loaded (status: {})",
                health.status.as_deref().unwrap_or("unknown")
            ),
            Err(err) => log::error!("API health check failed: {:?}", err),
        }

        let fetch_model_info = matches!(&outcome, Ok(health) if health.model_loaded)
            && !model_info_requested.replace(true);

        dispatcher.dispatch(PopupAction::HealthChecked(outcome));

        if fetch_model_info {
            match client.model_info().await {
                Ok(info) => dispatcher.dispatch(PopupAction::ModelInfoLoaded(info)),
                Err(err) => {
                    log::warn!("Failed to load model info: {:?}", err);
                    model_info_requested.replace(false);
                }
            }
        }
    });
}
