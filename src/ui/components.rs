/// Reusable UI components

use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use yew::prelude::*;

use crate::prediction::ModelInfo;
use crate::state::Connectivity;
use crate::verdict::{ResultView, Verdict};

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    pub connectivity: Connectivity,
}

#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    html! {
        <div class="status-bar">
            <span class={classes!("status-dot", props.connectivity.dot_class())}></span>
            <span class="status-text">{props.connectivity.status_text()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingPanelProps {
    pub shown: bool,
}

#[function_component(LoadingPanel)]
pub fn loading_panel(props: &LoadingPanelProps) -> Html {
    if !props.shown {
        return html! {};
    }

    html! {
        <div class="loading show">
            <Spinner />
            <p class="loading-text">{"Analiz ediliyor..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: Option<String>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="error show">
                <Alert r#type={AlertType::Danger} title={"Hata"} inline={true}>
                    {format!("❌ {}", message)}
                </Alert>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ScoreBarProps {
    pub width: String, // CSS width, already clamped
    pub verdict: Verdict,
}

#[function_component(ScoreBar)]
pub fn score_bar(props: &ScoreBarProps) -> Html {
    let color = match props.verdict {
        Verdict::Clickbait => "#e74c3c",
        Verdict::Normal => "#27ae60",
    };

    html! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style={format!("width: {}; background-color: {}; height: 100%; transition: width 0.3s ease;", props.width, color)}
            ></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub view: Option<ResultView>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let Some(view) = &props.view else {
        return html! {};
    };

    html! {
        <div class={classes!("result", "show", view.verdict.css_class())}>
            <div class="result-icon">{view.verdict.icon()}</div>
            <div class="result-label">{view.verdict.label()}</div>
            <div class="result-score">{&view.score_text}</div>
            <ScoreBar width={view.fill_width.clone()} verdict={view.verdict} />
            if let Some(translation) = &view.translation {
                <p class="result-translation">{translation}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub api_version: Option<String>,
    #[prop_or_default]
    pub model_info: Option<ModelInfo>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <p class="footer-popup">
            {footer_text(props.api_version.as_deref(), props.model_info.as_ref())}
        </p>
    }
}

pub fn footer_text(api_version: Option<&str>, model_info: Option<&ModelInfo>) -> String {
    let mut text = format!("Clickbait Avcısı v{}", env!("CARGO_PKG_VERSION"));

    if let Some(version) = api_version {
        text.push_str(&format!(" • API v{}", version));
    }
    if let Some(info) = model_info {
        text.push_str(&format!(
            " • Model: {} kelime, {} token",
            info.vocab_size, info.max_length
        ));
    }

    text
}
