/// Presentation of a classifier answer
use crate::prediction::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clickbait,
    Normal,
}

impl Verdict {
    /// CSS modifier applied to the result panel
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Clickbait => "clickbait",
            Verdict::Normal => "normal",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Clickbait => "🚨",
            Verdict::Normal => "✅",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Clickbait => "CLICKBAIT UYARISI!",
            Verdict::Normal => "Normal Başlık",
        }
    }
}

/// Everything the result panel needs, computed once per answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub verdict: Verdict,
    pub score_text: String,
    pub fill_width: String,
    pub translation: Option<String>,
}

impl From<&Prediction> for ResultView {
    fn from(prediction: &Prediction) -> Self {
        let verdict = if prediction.is_clickbait {
            Verdict::Clickbait
        } else {
            Verdict::Normal
        };

        ResultView {
            verdict,
            score_text: format!(
                "Skor: {:.1}% | Güven: {}%",
                prediction.score * 100.0,
                prediction.confidence
            ),
            fill_width: fill_width(prediction.score),
            translation: translation_line(prediction),
        }
    }
}

/// CSS width of the score bar. The percentage is clamped to 0..=100 so an
/// out-of-range score cannot overflow the track.
pub fn fill_width(score: f64) -> String {
    let percent = score * 100.0;
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };

    // Two decimals hide float noise such as 0.57 * 100 = 56.99999999999999.
    // Adding 0.0 turns -0.0 into 0.0.
    let rounded = (percent * 100.0).round() / 100.0 + 0.0;
    format!("{}%", rounded)
}

fn translation_line(prediction: &Prediction) -> Option<String> {
    let translated = prediction.translated_text.as_deref()?.trim();
    let original = prediction.original_text.as_deref().unwrap_or_default().trim();

    if translated.is_empty() || translated == original {
        None
    } else {
        Some(format!("Çeviri: {}", translated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(is_clickbait: bool, score: f64, confidence: f64) -> Prediction {
        Prediction {
            is_clickbait,
            score,
            confidence,
            label: None,
            original_text: None,
            translated_text: None,
        }
    }

    #[test]
    fn test_clickbait_view() {
        let view = ResultView::from(&prediction(true, 0.87, 91.0));

        assert_eq!(view.verdict, Verdict::Clickbait);
        assert_eq!(view.verdict.css_class(), "clickbait");
        assert_eq!(view.verdict.icon(), "🚨");
        assert_eq!(view.verdict.label(), "CLICKBAIT UYARISI!");
        assert!(view.score_text.contains("87.0%"));
        assert!(view.score_text.contains("91%"));
        assert_eq!(view.fill_width, "87%");
    }

    #[test]
    fn test_normal_view() {
        let view = ResultView::from(&prediction(false, 0.12, 76.0));

        assert_eq!(view.verdict, Verdict::Normal);
        assert_eq!(view.verdict.css_class(), "normal");
        assert_eq!(view.verdict.icon(), "✅");
        assert_eq!(view.verdict.label(), "Normal Başlık");
        assert_eq!(view.score_text, "Skor: 12.0% | Güven: 76%");
    }

    #[test]
    fn test_confidence_keeps_decimals() {
        let view = ResultView::from(&prediction(true, 0.9234, 92.34));
        assert_eq!(view.score_text, "Skor: 92.3% | Güven: 92.34%");
    }

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(1.7), "100%");
        assert_eq!(fill_width(-0.2), "0%");
        assert_eq!(fill_width(f64::NAN), "0%");
        assert_eq!(fill_width(-0.0), "0%");
        assert_eq!(fill_width(-1e-9), "0%");
    }

    #[test]
    fn test_fill_width_rounding() {
        assert_eq!(fill_width(0.57), "57%");
        assert_eq!(fill_width(0.4321), "43.21%");
        assert_eq!(fill_width(0.0), "0%");
        assert_eq!(fill_width(1.0), "100%");
    }

    #[test]
    fn test_translation_line() {
        let mut translated = prediction(true, 0.8, 80.0);
        translated.original_text = Some("Bunu gören şok oldu".to_string());
        translated.translated_text = Some("Everyone who saw this was shocked".to_string());

        assert_eq!(
            ResultView::from(&translated).translation.as_deref(),
            Some("Çeviri: Everyone who saw this was shocked")
        );

        let mut untranslated = prediction(false, 0.1, 90.0);
        untranslated.original_text = Some("Snow expected tomorrow".to_string());
        untranslated.translated_text = Some("Snow expected tomorrow".to_string());

        assert_eq!(ResultView::from(&untranslated).translation, None);
    }
}
