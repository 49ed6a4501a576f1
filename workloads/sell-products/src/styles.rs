pub const SELL_STYLES: &str = r##"
:root {
    --primary: #16a34a;
    --primary-hover: #15803d;
    --danger: #dc2626;
    --bg: #f0fdf4;
    --card-bg: #ffffff;
    --text: #1f2937;
    --text-muted: #6b7280;
    --border: #e5e7eb;
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
.header-nav a[aria-current="page"] { color: var(--primary); font-weight: 600; }

main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

section { margin-bottom: 2rem; }
section[hidden] { display: none; }

.sell-header { text-align: center; }
.sell-header h1 { font-size: 2.25rem; margin-bottom: 1rem; }
.sell-header .icon, h2 .icon { color: var(--primary); }

.tagline {
    max-width: 42rem;
    margin: 0 auto;
    color: var(--text-muted);
    font-size: 1.125rem;
}

.list-toggle { text-align: center; }

button {
    font: inherit;
    cursor: pointer;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--card-bg);
    padding: 0.5rem 1rem;
}

.list-toggle button,
button.primary {
    background: var(--primary);
    border-color: var(--primary);
    color: #fff;
    font-weight: 600;
    padding: 0.75rem 1.5rem;
}

.list-toggle button:hover,
button.primary:hover { background: var(--primary-hover); }

button.danger { color: var(--danger); border-color: var(--danger); }

.notice {
    margin-bottom: 1rem;
    color: var(--primary-hover);
    font-weight: 600;
}

.listing-form-section,
.seller-stats,
.seller-tips {
    background: var(--card-bg);
    border-radius: 12px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.08);
    padding: 2rem;
}

h2 { font-size: 1.5rem; margin-bottom: 1.5rem; }

.form-errors {
    list-style: none;
    margin-bottom: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 8px;
    background: #fef2f2;
    color: var(--danger);
}

.form-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
    margin-bottom: 1.25rem;
}

label { display: block; font-weight: 500; font-size: 0.875rem; }

input[type="text"],
select,
textarea {
    display: block;
    width: 100%;
    margin-top: 0.5rem;
    padding: 0.75rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font: inherit;
}

.price-input { display: flex; align-items: center; gap: 0.5rem; }
.currency { color: var(--text-muted); margin-top: 0.5rem; }

.eco-options {
    border: none;
    margin: 1.25rem 0;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 0.5rem;
}

.eco-options legend { font-weight: 600; margin-bottom: 0.75rem; }
.eco-option { font-weight: 400; }

.image-upload {
    border: 2px dashed var(--border);
    border-radius: 8px;
    padding: 1.5rem;
    text-align: center;
    color: var(--text-muted);
    margin-bottom: 1.5rem;
}

.image-upload input[type="file"] { display: none; }
.upload-label { font-weight: 600; color: var(--text); }
.upload-hint { font-size: 0.75rem; }
.choose-files { color: var(--primary); cursor: pointer; margin-top: 0.5rem; }

.form-actions { display: flex; gap: 1rem; justify-content: flex-end; }

.listing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}

.listing-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0,0,0,0.08);
}

.listing-image { position: relative; }
.listing-image img { width: 100%; height: 12rem; object-fit: cover; display: block; }

.status-badge {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.status-active { background: #dcfce7; color: #166534; }
.status-sold { background: #f3f4f6; color: #374151; }

.listing-info { padding: 1rem; }
.listing-info h3 { font-size: 1rem; margin-bottom: 0.5rem; }
.listing-price { font-size: 1.25rem; font-weight: 700; color: var(--primary); }

.eco-features { display: flex; flex-wrap: wrap; gap: 0.25rem; margin: 0.5rem 0; }
.eco-feature {
    font-size: 0.75rem;
    background: var(--bg);
    color: var(--primary-hover);
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
}

.listing-meta {
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
    color: var(--text-muted);
    margin-bottom: 0.75rem;
}

.listing-actions { display: flex; gap: 0.5rem; }
.listing-actions form { flex: 1; }
.listing-actions button { width: 100%; }

.stats-grid,
.tips-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1.25rem;
}

.stat { text-align: center; padding: 1rem; border-radius: 8px; background: var(--bg); }
.stat-value { font-size: 2rem; font-weight: 700; color: var(--primary); }
.stat-label { color: var(--text-muted); font-size: 0.875rem; }

.tip h3 { font-size: 1rem; margin-bottom: 0.25rem; }
.tip p { color: var(--text-muted); font-size: 0.875rem; }
"##;
