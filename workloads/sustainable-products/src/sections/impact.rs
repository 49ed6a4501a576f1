//! Environmental impact footer.

/// One headline figure in the impact footer.
pub struct ImpactFigure {
    pub value: &'static str,
    pub label: &'static str,
}

pub const IMPACT_FIGURES: [ImpactFigure; 3] = [
    ImpactFigure {
        value: "50K+",
        label: "Sustainable Products",
    },
    ImpactFigure {
        value: "1M+",
        label: "CO\u{2082} Saved (kg)",
    },
    ImpactFigure {
        value: "25K+",
        label: "Happy Eco-Warriors",
    },
];

/// Render the impact footer section.
pub fn render_impact_footer() -> String {
    let figures: String = IMPACT_FIGURES
        .iter()
        .map(|f| {
            format!(
                r#"<div class="impact-figure"><div class="impact-value">{}</div><div class="impact-label">{}</div></div>"#,
                f.value, f.label
            )
        })
        .collect();

    format!(
        r#"<section class="impact-footer" data-section="impact">
    <h2>Making a Difference Together</h2>
    <div class="impact-grid">{}</div>
</section>"#,
        figures
    )
}
