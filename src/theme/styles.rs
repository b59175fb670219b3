//! Global CSS styles for the Campus Placement Portal.
//!
//! Light palette on `:root`, dark palette on `[data-theme="dark"]`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg-color: #f8fafc;
  --card-bg: #ffffff;
  --header-bg: rgba(255, 255, 255, 0.92);
  --border-color: #e2e8f0;

  /* Text */
  --text-color: #1e293b;
  --text-muted: #64748b;

  /* Accents */
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --primary-soft: rgba(37, 99, 235, 0.1);
  --internship: #7c3aed;
  --internship-soft: rgba(124, 58, 237, 0.1);
  --success: #10b981;
  --success-shadow: rgba(16, 185, 129, 0.3);

  /* Shadows */
  --shadow-light: rgba(15, 23, 42, 0.06);
  --shadow-medium: rgba(15, 23, 42, 0.12);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Layout */
  --header-height: 72px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

[data-theme="dark"] {
  --bg-color: #0f172a;
  --card-bg: #1e293b;
  --header-bg: rgba(15, 23, 42, 0.92);
  --border-color: #334155;

  --text-color: #f1f5f9;
  --text-muted: #94a3b8;

  --primary: #3b82f6;
  --primary-hover: #60a5fa;
  --primary-soft: rgba(59, 130, 246, 0.15);
  --internship: #a78bfa;
  --internship-soft: rgba(167, 139, 250, 0.15);

  --shadow-light: rgba(0, 0, 0, 0.3);
  --shadow-medium: rgba(0, 0, 0, 0.45);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  overflow: hidden;
}

/* === Page Shell === */
.portal {
  height: 100vh;
  background: var(--bg-color);
  color: var(--text-color);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.portal-scroll {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.hero {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 1.5rem 1rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.hero-tagline {
  margin-top: 0.5rem;
  color: var(--text-muted);
}

.portal-footer {
  padding: 2rem 1.5rem 3rem;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 100;
  height: var(--header-height);
  background: var(--header-bg);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border-color);
}

.nav-header-inner {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.app-title {
  font-size: var(--text-lg);
  font-weight: 700;
  white-space: nowrap;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  overflow-x: auto;
}

.nav-link {
  padding: 0.5rem 0.9rem;
  border: none;
  border-radius: 999px;
  background: transparent;
  color: var(--text-muted);
  font: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  white-space: nowrap;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-link.active {
  background: var(--primary-soft);
  color: var(--primary);
}

/* === Theme Toggle === */
.theme-toggle {
  position: relative;
  width: 40px;
  height: 40px;
  flex-shrink: 0;
  border: 1px solid var(--border-color);
  border-radius: 50%;
  background: var(--card-bg);
  color: var(--text-color);
  cursor: pointer;
}

.theme-icon {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

/* === Sections === */
.section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem;
  scroll-margin-top: var(--header-height);
}

.section-header {
  margin-bottom: 1.5rem;
}

.section-title {
  font-size: var(--text-xl);
  font-weight: 700;
}

.section-subtitle {
  margin-top: 0.25rem;
  color: var(--text-muted);
}

.cards-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.25rem;
}

/* === Opportunity Card === */
.opportunity-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  background: var(--card-bg);
  border: 1px solid var(--border-color);
  border-radius: 12px;
  box-shadow: 0 2px 6px var(--shadow-light);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.opportunity-card:hover {
  transform: translateY(-3px);
  box-shadow: 0 8px 20px var(--shadow-medium);
}

.card-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.75rem;
}

.company-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.opportunity-type {
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--primary);
  font-size: 0.75rem;
  font-weight: 600;
  white-space: nowrap;
}

.opportunity-type.internship {
  background: var(--internship-soft);
  color: var(--internship);
}

.job-description {
  color: var(--text-muted);
  font-style: italic;
}

.card-details {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.detail-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: var(--text-sm);
}

.detail-label {
  color: var(--text-muted);
}

.detail-value {
  font-weight: 600;
}

.registered-count {
  display: inline-block;
  min-width: 2.5rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--primary);
  font-weight: 700;
  text-align: center;
}

.registered-count.pulse {
  animation: pulse 0.6s ease-in-out;
}

.registered-count.pulse.pulse-again {
  animation-name: pulse-again;
}

@keyframes pulse {
  0% { transform: scale(1); }
  50% { transform: scale(1.1); }
  100% { transform: scale(1); }
}

@keyframes pulse-again {
  0% { transform: scale(1); }
  50% { transform: scale(1.1); }
  100% { transform: scale(1); }
}

.card-actions {
  margin-top: auto;
}

.apply-btn {
  width: 100%;
  padding: 0.7rem 1rem;
  border: none;
  border-radius: 8px;
  background: var(--primary);
  color: #ffffff;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.apply-btn:hover {
  background: var(--primary-hover);
}

/* === Empty State === */
.empty-state {
  grid-column: 1 / -1;
  padding: 3rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border: 1px dashed var(--border-color);
  border-radius: 12px;
}

.empty-icon {
  display: block;
  font-size: 2.5rem;
  margin-bottom: 0.75rem;
}

.empty-state h3 {
  color: var(--text-color);
  margin-bottom: 0.5rem;
}

/* === Feedback Toasts === */
.feedback-stack {
  position: fixed;
  top: 90px;
  right: 20px;
  z-index: 1000;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  pointer-events: none;
}

.theme-feedback,
.apply-feedback {
  padding: 1rem 1.5rem;
  border-radius: 8px;
  transform: translateX(calc(100% + 40px));
  transition: transform var(--transition-normal);
}

.theme-feedback.visible,
.apply-feedback.visible {
  transform: translateX(0);
}

.theme-feedback {
  background: var(--card-bg);
  color: var(--text-color);
  border: 1px solid var(--border-color);
  box-shadow: 0 4px 12px var(--shadow-medium);
}

.apply-feedback {
  background: var(--success);
  color: #ffffff;
  box-shadow: 0 4px 12px var(--success-shadow);
}

.feedback-content {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 500;
}

.feedback-icon {
  font-size: 1.2rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-header-inner {
    padding: 0 1rem;
  }

  .app-title {
    display: none;
  }

  .cards-grid {
    grid-template-columns: 1fr;
  }
}
"#;
