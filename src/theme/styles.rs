//! Global CSS styles for Dropdeck.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-deep: #101216;
  --slate-panel: #181b21;
  --slate-raised: #21252d;
  --slate-outline: #3a4150;

  /* ACCENT */
  --accent: #4d9fff;
  --accent-glow: rgba(77, 159, 255, 0.35);

  /* TEXT */
  --text-primary: #e8eaed;
  --text-secondary: rgba(232, 234, 237, 0.7);
  --text-muted: rgba(232, 234, 237, 0.45);

  /* SEMANTIC */
  --danger: #ff5c6c;
  --warning: #ffb454;

  /* Layout */
  --radius: 6px;
  --placeholder-min-h: 48px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --overlay-fade: 100ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  background: var(--slate-deep);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Board layout === */
.board {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.5rem 2rem;
  min-height: 100vh;
}

.board__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.board__title {
  font-size: 1.5rem;
  font-weight: 600;
  letter-spacing: 0.02em;
}

.board__error {
  color: var(--warning);
  font-size: 0.875rem;
}

.board__slots {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.board__slot {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.board__slot-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.board__gallery {
  display: flex;
  gap: 0.75rem;
  align-items: center;
  flex-wrap: wrap;
  padding: 1rem;
  background: var(--slate-panel);
  border: 1px solid var(--slate-outline);
  border-radius: var(--radius);
  min-height: 7.5rem;
}

.board__empty {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.import-button {
  padding: 0.5rem 1rem;
  background: var(--slate-raised);
  color: var(--text-primary);
  border: 1px solid var(--slate-outline);
  border-radius: var(--radius);
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.import-button:hover:not(:disabled) {
  border-color: var(--accent);
}

.import-button:disabled {
  opacity: 0.5;
  cursor: default;
}

/* === Selectable image slot === */
.selectable-image {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
}

.selectable-image__frame {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
}

.selectable-image__img {
  display: block;
  width: 100%;
  border-radius: var(--radius);
}

.selectable-image__img--pending {
  display: none;
}

.selectable-image__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  min-height: var(--placeholder-min-h);
  background: var(--slate-panel);
  border-radius: var(--radius);
}

.selectable-image__placeholder-glyph {
  font-size: 3rem;
  color: var(--text-muted);
}

.selectable-image__reset {
  position: absolute;
  top: 0;
  right: 0;
  padding: 0.5rem;
}

/* === Image fallback === */
.image-fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  min-height: var(--placeholder-min-h);
  color: var(--text-secondary);
  background: var(--slate-panel);
  border-radius: var(--radius);
}

.loading-spinner {
  width: 1.5rem;
  height: 1.5rem;
  border: 3px solid var(--slate-outline);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Metadata overlay === */
.image-metadata-overlay {
  position: absolute;
  bottom: 0;
  left: 0;
  padding: 0.25rem 0.5rem;
  font-size: 0.75rem;
  color: var(--text-secondary);
  background: rgba(16, 18, 22, 0.75);
  border-radius: 0 var(--radius) 0 var(--radius);
}

/* === Icon button === */
.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--slate-raised);
  color: var(--text-primary);
  border: 1px solid var(--slate-outline);
  border-radius: var(--radius);
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.icon-button:hover {
  border-color: var(--danger);
}

.icon-button--sm { width: 1.5rem; height: 1.5rem; font-size: 0.75rem; }
.icon-button--md { width: 2rem; height: 2rem; font-size: 0.875rem; }
.icon-button--lg { width: 2.5rem; height: 2.5rem; font-size: 1rem; }

/* === Draggable thumbnail === */
.draggable-thumb {
  height: 6rem;
  border-radius: var(--radius);
  border: 1px solid var(--slate-outline);
  cursor: grab;
  transition: border-color var(--transition-fast);
}

.draggable-thumb:hover {
  border-color: var(--accent);
}

/* === Drop overlay === */
.drop-overlay {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  animation: drop-overlay-fade var(--overlay-fade);
}

.drop-overlay__backdrop {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: var(--slate-deep);
  border-radius: var(--radius);
  transition: opacity var(--transition-fast);
}

.drop-overlay__label {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-secondary);
  transition: opacity var(--transition-fast);
}

.drop-overlay__border {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  border: 2px dashed var(--slate-outline);
  border-radius: var(--radius);
  transition: opacity var(--transition-fast);
}

@keyframes drop-overlay-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
