//! CSS styles for the landing page.
//!
//! The page ships as one self-contained HTML file, so all styling is inlined
//! from these constants.
//!
//! # Customization
//!
//! ```rust
//! use page_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".hero { background: black; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - light theme with indigo accents.
pub const PAGE_CSS: &str = r#"
:root {
    --indigo-50: #eef2ff;
    --indigo-100: #e0e7ff;
    --indigo-200: #c7d2fe;
    --indigo-300: #a5b4fc;
    --indigo-500: #6366f1;
    --indigo-600: #4f46e5;
    --indigo-700: #4338ca;
    --indigo-800: #3730a3;
    --blue-600: #2563eb;
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-200: #e2e8f0;
    --slate-500: #64748b;
    --slate-600: #475569;
    --slate-700: #334155;
    --slate-800: #1e293b;
    --slate-900: #0f172a;
    --slate-950: #020617;
    --green-500: #22c55e;
    --yellow-400: #facc15;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: #fff;
    color: var(--slate-900);
    line-height: 1.6;
    margin: 0;
}

img, video {
    max-width: 100%;
    display: block;
}

.container {
    max-width: 64rem;
    margin: 0 auto;
}

.container.narrow {
    max-width: 48rem;
}

.two-col {
    display: grid;
    gap: 3rem;
    align-items: center;
}

@media (min-width: 768px) {
    .two-col { grid-template-columns: 1fr 1fr; }
}

.page-section {
    padding: 4rem 1.5rem;
    position: relative;
}

.page-section.dark {
    background: var(--slate-900);
    color: #fff;
}

.page-section.accent {
    background: var(--indigo-600);
    color: #fff;
    text-align: center;
}

.section-title {
    font-size: 2rem;
    font-weight: 700;
    margin: 0 0 3rem;
    text-align: center;
}

.section-title.with-icon {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    justify-content: center;
}

.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}

.icon-accent {
    color: var(--indigo-500);
    flex-shrink: 0;
}

/* Hero */
.hero {
    background: linear-gradient(135deg, var(--indigo-50), #fff);
    text-align: center;
    overflow: hidden;
    padding: 6rem 1.5rem;
}

.hero-glow {
    position: absolute;
    top: -8rem;
    right: -8rem;
    width: 16rem;
    height: 16rem;
    border-radius: 50%;
    background: rgba(199, 210, 254, 0.2);
    filter: blur(48px);
}

.eyebrow {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    margin-bottom: 1rem;
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--indigo-700);
    background: var(--indigo-100);
    border-radius: 9999px;
}

.hero-title {
    font-size: clamp(2rem, 5vw, 3.75rem);
    font-weight: 800;
    line-height: 1.15;
    margin: 0 0 1.5rem;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: var(--slate-600);
    margin: 0 0 2rem;
}

.hero-video {
    margin-bottom: 3rem;
    border-radius: 1.5rem;
    overflow: hidden;
    border: 4px solid #fff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    aspect-ratio: 16 / 9;
    background: var(--slate-100);
}

.hero-video video {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-bullets {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
    margin-bottom: 2.5rem;
}

.hero-bullet {
    display: flex;
    gap: 0.5rem;
    align-items: center;
    color: var(--slate-600);
    font-weight: 500;
}

.friction-remover {
    display: flex;
    gap: 0.5rem;
    align-items: center;
    justify-content: center;
    font-weight: 500;
    color: var(--slate-500);
    margin-bottom: 1.5rem;
}

.accent .friction-remover,
.offer .friction-remover {
    color: var(--indigo-100);
    font-size: 1.125rem;
}

.pulse-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: var(--green-500);
    animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
    50% { opacity: 0.4; }
}

.hero-social-proof {
    margin-top: 3rem;
    padding-top: 3rem;
    border-top: 1px solid var(--slate-200);
    display: flex;
    flex-direction: column;
    align-items: center;
}

.avatar-strip {
    display: flex;
    margin-bottom: 0.75rem;
}

.avatar {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    border: 2px solid #fff;
    object-fit: cover;
    margin-left: -0.5rem;
}

.social-proof {
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--slate-500);
}

/* Checkout */
.checkout {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
    margin-bottom: 1rem;
}

.checkout-btn {
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    padding: 1rem 2rem;
    border: none;
    border-radius: 0.75rem;
    font-size: 1.125rem;
    font-weight: 700;
    text-decoration: none;
    color: #fff;
    background: var(--indigo-600);
    cursor: pointer;
    transition: transform 0.15s ease;
}

.checkout-btn:hover { transform: scale(1.05); }
.checkout-btn:active { transform: scale(0.95); }

.checkout-mercado-pago { background: var(--blue-600); }

.offer .checkout-btn,
.accent .checkout-btn {
    background: #fff;
    color: var(--indigo-600);
}

.offer .checkout-mercado-pago,
.accent .checkout-mercado-pago {
    color: var(--blue-600);
}

.checkout-rail {
    font-size: 0.625rem;
    opacity: 0.8;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

/* Lead */
.lead {
    border-top: 1px solid var(--slate-100);
    border-bottom: 1px solid var(--slate-100);
}

.kicker {
    font-size: 0.875rem;
    font-weight: 700;
    color: var(--indigo-600);
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin: 0 0 1rem;
}

.pain-point {
    font-size: 1.5rem;
    font-weight: 600;
    font-style: italic;
    color: var(--slate-800);
}

.solution-teaser {
    font-size: 1.125rem;
    color: var(--slate-600);
}

.lead-cards {
    background: var(--slate-50);
    padding: 2rem;
    border-radius: 1.5rem;
    border: 1px solid var(--slate-200);
    display: grid;
    gap: 1rem;
}

.lead-card {
    display: flex;
    gap: 1rem;
    align-items: center;
    padding: 1rem;
    background: #fff;
    border-radius: 1rem;
}

.lead-card h4 { margin: 0; }
.lead-card p { margin: 0; font-size: 0.75rem; color: var(--slate-500); }

.lead-card-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: var(--indigo-100);
    color: var(--indigo-600);
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Proof */
.proof { background: var(--slate-50); }

.review-grid,
.archetype-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .review-grid, .archetype-grid { grid-template-columns: 1fr 1fr; }
}

.review {
    background: #fff;
    padding: 1.5rem;
    border-radius: 1rem;
    border: 1px solid var(--slate-200);
}

.stars { display: flex; gap: 0.25rem; color: var(--yellow-400); margin-bottom: 1rem; }
.review-text { font-style: italic; color: var(--slate-700); }
.review-author { font-weight: 700; font-size: 0.875rem; color: var(--indigo-600); }

/* Benefits */
.benefit-grid {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
}

.benefit {
    padding: 1.5rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    text-align: left;
}

.benefit p { font-weight: 700; margin: 0; }

.benefit-icon {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.75rem;
    background: rgba(99, 102, 241, 0.2);
    color: var(--indigo-300);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}

/* Differentiators */
.portrait { position: relative; margin-bottom: 1.5rem; }

.portrait-backdrop {
    position: absolute;
    inset: -1rem;
    background: var(--indigo-100);
    border-radius: 1.5rem;
    transform: rotate(3deg);
}

.portrait-img {
    position: relative;
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: 1rem;
}

.author-card {
    position: relative;
    background: var(--slate-50);
    padding: 1.5rem;
    border-radius: 1rem;
    border: 1px solid var(--slate-100);
}

.author-name { font-weight: 700; font-size: 1.25rem; margin: 0; }
.author-title { color: var(--indigo-600); font-weight: 500; }
.author-quote { color: var(--slate-600); font-style: italic; }

.differentiators .section-title { text-align: left; margin-bottom: 2rem; }

.differentiator-list { display: grid; gap: 1rem; }

.differentiator {
    display: flex;
    gap: 1rem;
    align-items: center;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid var(--slate-100);
    background: var(--slate-50);
    font-weight: 500;
}

/* How it works */
.how-it-works { background: var(--slate-50); }

.steps { position: relative; display: grid; gap: 3rem; }

.steps-rail {
    position: absolute;
    left: 23px;
    top: 0;
    bottom: 0;
    width: 2px;
    background: var(--indigo-100);
}

.step { display: flex; gap: 1.5rem; align-items: flex-start; position: relative; }
.step h3 { margin: 0 0 0.25rem; font-size: 1.25rem; }
.step p { margin: 0; color: var(--slate-600); }

.step-number {
    width: 3rem;
    height: 3rem;
    flex-shrink: 0;
    border-radius: 50%;
    background: var(--indigo-600);
    color: #fff;
    font-weight: 700;
    font-size: 1.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Offer */
.offer-card {
    position: relative;
    overflow: hidden;
    padding: 4rem 2rem;
    border-radius: 3rem;
    color: #fff;
    background: linear-gradient(135deg, var(--indigo-600), var(--indigo-800));
}

.offer-card .section-title { text-align: left; }

.offer-backdrop {
    position: absolute;
    top: 0;
    right: 0;
    padding: 2rem;
    opacity: 0.1;
}

.offer-list { list-style: none; padding: 0; margin: 0 0 2.5rem; display: grid; gap: 1rem; }

.offer-item {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--indigo-100);
}

.offer-actions { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }

/* Team */
.about-team { background: var(--slate-50); }
.team-list { display: grid; gap: 1.5rem; }

.team-member {
    display: flex;
    gap: 2rem;
    align-items: center;
    padding: 2rem;
    background: #fff;
    border-radius: 1.5rem;
    border: 1px solid var(--slate-200);
}

.team-avatar {
    width: 8rem;
    height: 8rem;
    flex-shrink: 0;
    border-radius: 1rem;
    background: var(--indigo-50);
    color: var(--indigo-300);
    display: flex;
    align-items: center;
    justify-content: center;
}

.member-name { color: var(--indigo-600); font-size: 1.5rem; margin: 0; }
.member-role { font-size: 0.875rem; font-weight: 700; color: var(--slate-500); text-transform: uppercase; letter-spacing: 0.1em; }
.member-desc { color: var(--slate-600); font-style: italic; }

/* Archetypes */
.social-proof-intent { border-top: 1px solid var(--slate-100); border-bottom: 1px solid var(--slate-100); }

.archetype {
    padding: 2rem;
    border-radius: 1.5rem;
    background: var(--slate-50);
    border: 1px solid var(--slate-200);
}

.archetype-head { display: flex; gap: 1rem; align-items: center; margin-bottom: 1.5rem; }
.archetype-head h3 { margin: 0; font-size: 1.25rem; }

.archetype-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    background: #fff;
    color: var(--indigo-600);
    display: flex;
    align-items: center;
    justify-content: center;
}

.archetype-quote { color: var(--slate-600); font-style: italic; }

/* FAQs */
.faq-list { display: grid; gap: 1.5rem; }

.faq {
    padding: 1.5rem;
    background: var(--slate-50);
    border-radius: 1rem;
    border: 1px solid var(--slate-100);
}

.faq:hover { border-color: var(--indigo-200); }
.faq-q { font-size: 1.125rem; margin: 0 0 0.5rem; color: var(--slate-800); }
.faq-a { margin: 0; color: var(--slate-600); }

/* Full stop */
.pill-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-bottom: 2rem; }

.pill {
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 600;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
}

/* Footer */
.page-footer {
    padding: 3rem 1.5rem;
    background: var(--slate-900);
    color: var(--slate-500);
    text-align: center;
    font-size: 0.875rem;
}

.footer-links { display: flex; gap: 1.5rem; justify-content: center; margin-top: 1rem; }
.footer-links a { color: inherit; text-decoration: none; }
.footer-links a:hover { color: #fff; }
"#;

/// Sidebar styles, only emitted when the editor is rendered.
pub const EDITOR_CSS: &str = r#"
body.with-editor {
    display: grid;
    grid-template-columns: 22rem 1fr;
    background: var(--slate-950);
}

.editor-sidebar {
    height: 100vh;
    position: sticky;
    top: 0;
    overflow-y: auto;
    padding: 1rem;
    display: grid;
    gap: 1rem;
    align-content: start;
    background: var(--slate-800);
}

.editor-sidebar::-webkit-scrollbar { width: 6px; }
.editor-sidebar::-webkit-scrollbar-thumb { background: rgba(255, 255, 255, 0.08); border-radius: 10px; }

.editor-panel {
    background: rgba(51, 65, 85, 0.5);
    border: 1px solid rgba(255, 255, 255, 0.05);
    border-radius: 0.75rem;
    overflow: hidden;
}

.editor-toggle {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: none;
    border: none;
    text-align: left;
    color: var(--slate-500);
    cursor: pointer;
}

.editor-toggle:hover { background: rgba(255, 255, 255, 0.05); }
.editor-name { margin: 0; font-size: 0.875rem; color: #fff; }
.editor-id { margin: 0.125rem 0 0; font-size: 0.625rem; text-transform: uppercase; letter-spacing: 0.05em; }

.editor-body {
    padding: 0 1rem 1rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: grid;
    gap: 1rem;
}

.editor-purpose { font-size: 0.75rem; color: var(--slate-500); font-style: italic; }
.editor-field { display: grid; gap: 0.375rem; }

.editor-label {
    font-size: 0.625rem;
    font-weight: 700;
    color: var(--slate-500);
    text-transform: uppercase;
}

.editor-input {
    width: 100%;
    background: var(--slate-900);
    border: 1px solid var(--slate-600);
    border-radius: 0.5rem;
    padding: 0.5rem;
    font-size: 0.875rem;
    color: #fff;
    resize: none;
}

.editor-refine {
    padding-top: 1rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: grid;
    gap: 0.5rem;
}

.refine-btn {
    display: flex;
    gap: 0.5rem;
    justify-content: center;
    align-items: center;
    padding: 0.5rem;
    border: none;
    border-radius: 0.5rem;
    background: var(--indigo-600);
    color: #fff;
    font-size: 0.75rem;
    font-weight: 500;
    cursor: pointer;
}

.refine-btn:disabled { opacity: 0.5; cursor: not-allowed; }

.spin { animation: spin 1s linear infinite; }

@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;
