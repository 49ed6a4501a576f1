//! Static selling tips.

pub struct SellerTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SELLER_TIPS: [SellerTip; 6] = [
    SellerTip {
        icon: "&#128248;",
        title: "High-Quality Photos",
        body: "Use clear, well-lit photos from multiple angles to showcase your product's condition and features.",
    },
    SellerTip {
        icon: "&#127793;",
        title: "Highlight Eco-Features",
        body: "Emphasize sustainability aspects like recyclable materials, energy efficiency, or carbon footprint reduction.",
    },
    SellerTip {
        icon: "&#128176;",
        title: "Competitive Pricing",
        body: "Research similar products to set fair prices that reflect both value and environmental benefits.",
    },
    SellerTip {
        icon: "&#128221;",
        title: "Detailed Descriptions",
        body: "Provide comprehensive information about condition, usage, and any wear to build buyer trust.",
    },
    SellerTip {
        icon: "&#128666;",
        title: "Eco-Friendly Shipping",
        body: "Use recycled packaging materials and offer carbon-neutral shipping options when possible.",
    },
    SellerTip {
        icon: "&#11088;",
        title: "Build Your Reputation",
        body: "Respond promptly to inquiries and provide excellent customer service to earn positive reviews.",
    },
];

/// Render the tips section.
pub fn render_seller_tips() -> String {
    let tips: String = SELLER_TIPS
        .iter()
        .map(|tip| {
            format!(
                r#"<div class="tip"><h3>{} {}</h3><p>{}</p></div>"#,
                tip.icon, tip.title, tip.body
            )
        })
        .collect();

    format!(
        r#"<section class="seller-tips" data-section="tips">
    <h2>Tips for Successful Selling</h2>
    <div class="tips-grid">{}</div>
</section>"#,
        tips
    )
}
