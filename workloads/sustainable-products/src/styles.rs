pub const CATALOG_STYLES: &str = r##"
:root {
    --primary: #16a34a;
    --primary-hover: #15803d;
    --accent: #2563eb;
    --bg: #f0fdf4;
    --card-bg: #ffffff;
    --text: #1f2937;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --eco-high-bg: #dcfce7;
    --eco-high-text: #166534;
    --eco-medium-bg: #fef9c3;
    --eco-medium-text: #854d0e;
    --eco-low-bg: #ffedd5;
    --eco-low-text: #9a3412;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: linear-gradient(135deg, var(--bg), #eff6ff);
    color: var(--text);
    line-height: 1.5;
    min-height: 100vh;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    text-decoration: none;
}

.header-nav { display: flex; gap: 1.5rem; }
.header-nav a { color: var(--text); text-decoration: none; }

main {
    max-width: 1400px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.catalog-header {
    text-align: center;
    margin-bottom: 2rem;
}

.catalog-header h1 {
    font-size: 2.25rem;
    margin-bottom: 1rem;
}

.catalog-header .icon { color: var(--primary); }

.tagline {
    max-width: 42rem;
    margin: 0 auto 0.5rem;
    color: var(--text-muted);
    font-size: 1.125rem;
}

.result-count { color: var(--text-muted); font-size: 0.875rem; }

.filter-bar {
    background: var(--card-bg);
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
    padding: 1.5rem;
    margin-bottom: 2rem;
}

.filter-form {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1rem;
}

.filter-label { font-weight: 500; }

.filter-form select {
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    background: var(--card-bg);
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.empty-state {
    grid-column: 1 / -1;
    text-align: center;
    padding: 4rem 2rem;
    color: var(--text-muted);
}

.product-card {
    background: var(--card-bg);
    border: 1px solid #f3f4f6;
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0,0,0,0.07);
    transition: box-shadow 0.3s, transform 0.3s;
}

.product-card:hover {
    box-shadow: 0 10px 20px rgba(0,0,0,0.1);
    transform: translateY(-4px);
}

.product-image {
    position: relative;
    aspect-ratio: 1;
    background: #f3f4f6;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.eco-badge {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    padding: 0.25rem 0.5rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 500;
    border: 1px solid transparent;
}

.eco-high { background: var(--eco-high-bg); color: var(--eco-high-text); }
.eco-medium { background: var(--eco-medium-bg); color: var(--eco-medium-text); }
.eco-low { background: var(--eco-low-bg); color: var(--eco-low-text); }

.product-info { padding: 1.25rem; }

.price-row {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}

.product-price {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--primary);
}

.star { color: #facc15; }
.star.half { opacity: 0.5; }
.rating-value { margin-left: 0.25rem; font-size: 0.875rem; color: var(--text-muted); }
.no-rating { color: #9ca3af; font-size: 0.875rem; }

.product-title {
    font-size: 0.875rem;
    font-weight: 500;
    height: 2.5rem;
    margin-bottom: 0.75rem;
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

.eco-features { margin-bottom: 1rem; }

.eco-features h4 {
    font-size: 0.75rem;
    font-weight: 600;
    margin-bottom: 0.5rem;
}

.eco-feature {
    display: inline-block;
    margin: 0 0.25rem 0.25rem 0;
    padding: 0.25rem 0.5rem;
    font-size: 0.75rem;
    color: #15803d;
    background: var(--bg);
    border: 1px solid #bbf7d0;
    border-radius: 9999px;
}

.shop-link {
    display: block;
    text-align: center;
    padding: 0.75rem;
    border-radius: 8px;
    color: white;
    font-weight: 500;
    text-decoration: none;
    background: linear-gradient(90deg, var(--primary), var(--accent));
}

.shop-link:hover {
    background: linear-gradient(90deg, var(--primary-hover), #1d4ed8);
}

.impact-footer {
    margin-top: 3rem;
    padding: 2rem;
    border-radius: 12px;
    background: var(--primary);
    color: white;
    text-align: center;
}

.impact-footer h2 { font-size: 1.5rem; margin-bottom: 1rem; }

.impact-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.impact-value { font-size: 1.875rem; font-weight: 700; }
.impact-label { color: #dcfce7; }

@media (max-width: 768px) {
    .impact-grid { grid-template-columns: 1fr; }
    .catalog-header h1 { font-size: 1.75rem; }
}
"##;
