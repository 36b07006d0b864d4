//! Global CSS styles for the portfolio page.
//!
//! Includes the classes the controllers toggle: `scrolled`, `show`,
//! `active`, `visible`, `fade-in`, `focused`, and the toast animations.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #2563eb;
  --primary-dark: #1d4ed8;
  --text: #1f2937;
  --text-muted: #6b7280;
  --surface: #ffffff;
  --surface-alt: #f9fafb;
  --border: #e5e7eb;

  --success: #10b981;
  --danger: #ef4444;
  --info: #3b82f6;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --header-height: 72px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--text);
  background: var(--surface);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(8px);
  z-index: 1000;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.site-header.scrolled {
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
}

.nav-list {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-muted);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  color: var(--text);
}

.menu-toggle {
  display: none;
}

.menu-toggle.active {
  color: var(--primary);
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .nav-list {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 1.5rem;
    background: var(--surface);
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
    display: none;
  }

  .nav-list.show {
    display: flex;
  }
}

/* === Sections & reveal === */
.section {
  padding: 6rem 0;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.section.visible {
  opacity: 1;
  transform: translateY(0);
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
  text-align: center;
}

.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
}

.hero-name {
  font-size: 3rem;
  line-height: 1.1;
}

.hero-role {
  font-size: 1.75rem;
  color: var(--primary);
  min-height: 2.5rem;
  margin: 0.75rem 0 1.25rem;
}

.hero-summary {
  max-width: 600px;
  color: var(--text-muted);
}

.hero-actions {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

.cursor {
  animation: blink 1s infinite;
}

@keyframes blink {
  0%, 50% { opacity: 1; }
  51%, 100% { opacity: 0; }
}

.about-text p + p {
  margin-top: 1rem;
}

.skills-grid,
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.skill-card,
.project-card {
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 12px;
  background: var(--surface-alt);
  opacity: 0;
  transform: translateY(20px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.skill-card.fade-in,
.project-card.fade-in {
  opacity: 1;
  transform: translateY(0);
}

.skill-card ul {
  list-style: none;
  margin-top: 0.75rem;
  color: var(--text-muted);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1rem 0;
}

.tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: rgba(37, 99, 235, 0.1);
  color: var(--primary);
}

.project-link {
  color: var(--primary);
  font-weight: 500;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--primary);
  color: white;
  border: 2px solid var(--primary);
}

.btn-primary:hover {
  background: var(--primary-dark);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-outline {
  background: transparent;
  color: var(--primary);
  border: 2px solid var(--primary);
}

/* === Contact form & floating labels === */
#contact-form {
  max-width: 640px;
  margin: 0 auto;
}

.contact-intro {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.form-group {
  position: relative;
  margin-bottom: 1.5rem;
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
}

.form-group label {
  position: absolute;
  top: 1rem;
  left: 1rem;
  color: var(--text-muted);
  transition: all 0.3s ease;
  pointer-events: none;
  background: white;
  padding: 0 0.5rem;
}

.form-group label.active {
  top: -0.5rem;
  left: 0.8rem;
  font-size: 0.8rem;
  color: var(--primary);
}

.form-group.focused label {
  color: var(--primary);
}

/* === Footer === */
.site-footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* === Toast notifications === */
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  color: white;
  padding: 1rem 1.5rem;
  border-radius: 8px;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  z-index: 10000;
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 400px;
}

.notification-close {
  color: white;
  font-size: 1.2rem;
  width: 20px;
  height: 20px;
  display: flex;
  align-items: center;
  justify-content: center;
}

@keyframes slideInRight {
  from {
    transform: translateX(100%);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

@keyframes slideOutRight {
  from {
    transform: translateX(0);
    opacity: 1;
  }
  to {
    transform: translateX(100%);
    opacity: 0;
  }
}
"#;
