//! Global CSS styles for Cardfold.
//!
//! Paper-and-lamplight aesthetic: a dim writing desk with cards fanned
//! out under a warm vignette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DESK (Backgrounds) */
  --desk-dark: #1c1612;
  --desk: #2a211a;
  --desk-warm: #3a2d22;

  /* PAPER (Cards, Forms) */
  --paper: #f6efe3;
  --paper-shadow: rgba(20, 12, 6, 0.55);
  --paper-edge: #d9cdb8;

  /* INK (Text) */
  --ink: #2b2118;
  --ink-soft: rgba(43, 33, 24, 0.7);
  --lamplight: #f0dcb4;
  --lamplight-soft: rgba(240, 220, 180, 0.65);

  /* SEMANTIC */
  --ribbon: #9c3b2e;
  --error: #c0392b;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Avenir Next', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-card: 800ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  width: 100%;
  height: 100%;
  overflow: hidden;
  background: var(--desk-dark);
  color: var(--lamplight);
  font-family: var(--font-sans);
  user-select: none;
  -webkit-user-select: none;
}

/* === App Shell === */
.app {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
  outline: none;
  background:
    radial-gradient(ellipse at 50% 30%, var(--desk-warm) 0%, var(--desk) 45%, var(--desk-dark) 100%);
}

.vignette {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 200;
  background: radial-gradient(ellipse at center,
    transparent 40%,
    rgba(10, 6, 3, 0.35) 75%,
    rgba(10, 6, 3, 0.75) 100%);
  transition: background var(--transition-card);
}

.vignette.card-open {
  background: radial-gradient(ellipse at center,
    rgba(10, 6, 3, 0.25) 30%,
    rgba(10, 6, 3, 0.6) 70%,
    rgba(10, 6, 3, 0.9) 100%);
}

.gallery-loading {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-serif);
  font-size: 1.4rem;
  color: var(--lamplight-soft);
}

/* === Login Gate === */
.login-screen {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 300;
}

.login-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  align-items: center;
  padding: 3rem 3.5rem;
  background: rgba(28, 22, 18, 0.85);
  border: 1px solid rgba(240, 220, 180, 0.15);
  border-radius: 6px;
  box-shadow: 0 30px 60px var(--paper-shadow);
}

.login-form h1 {
  font-family: var(--font-serif);
  font-weight: 500;
  font-size: 2.25rem;
  color: var(--lamplight);
  letter-spacing: 0.06em;
}

.login-form input {
  width: 16rem;
  padding: 0.65rem 0.9rem;
  font-size: 1rem;
  text-align: center;
  color: var(--ink);
  background: var(--paper);
  border: 2px solid transparent;
  border-radius: 3px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.login-form input.error {
  border-color: var(--error);
}

.login-form button {
  padding: 0.55rem 2.4rem;
  font-size: 1rem;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--desk-dark);
  background: var(--lamplight);
  border: none;
  border-radius: 3px;
  cursor: pointer;
  transition: filter var(--transition-fast);
}

.login-form button:hover {
  filter: brightness(1.08);
}

.login-error {
  font-size: 0.9rem;
  color: var(--error);
}

/* === Carousel === */
.carousel {
  position: absolute;
  inset: 0;
  cursor: grab;
  perspective: 1400px;
}

.carousel.dragging {
  cursor: grabbing;
}

.carousel.card-open {
  cursor: default;
}

.carousel-track {
  position: absolute;
  top: 50%;
  left: 50%;
  transform-style: preserve-3d;
}

/* === Card === */
.card-container {
  position: absolute;
  top: 0;
  left: 0;
  width: var(--width, 200px);
  height: var(--height, 500px);
  margin-left: calc(var(--width, 200px) / -2);
  margin-top: calc(var(--height, 500px) / -2);
  transform-style: preserve-3d;
  transition: transform var(--transition-card);
  will-change: transform;
  cursor: pointer;
}

.card-container.panning {
  transition: none;
  cursor: grabbing;
}

.card-container.open.zoomed {
  cursor: grab;
}

.card-container.hidden {
  pointer-events: none;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
}

.card-cover {
  position: absolute;
  inset: 0;
  z-index: 3;
  overflow: hidden;
  border-radius: 3px;
  background: var(--paper);
  box-shadow: 0 18px 45px var(--paper-shadow);
  backface-visibility: hidden;
  transform-origin: left center;
  transition: transform var(--transition-card);
}

.card-container.active:not(.open) .card-cover {
  box-shadow: 0 22px 55px var(--paper-shadow), 0 0 35px rgba(240, 220, 180, 0.12);
}

/* Opening a fold card swings the cover away like a book */
.card-container.fold.open .card-cover,
.card-container.fold.closing .card-cover {
  transform: rotateY(-178deg);
}

.card-container.fold-down .card-cover {
  transform-origin: center top;
}

.card-container.fold-down.open .card-cover,
.card-container.fold-down.closing .card-cover {
  transform: rotateX(178deg);
}

/* === Inside Panels (fold) === */
.card-left, .card-right {
  position: absolute;
  top: 0;
  height: 100%;
  z-index: 1;
  overflow: hidden;
  background: var(--paper);
  border-radius: 3px;
}

.card-container.open .card-left,
.card-container.closing .card-left {
  width: var(--left-width, 200px);
  height: var(--left-height, 500px);
  right: 100%;
}

.card-container.open .card-right,
.card-container.closing .card-right {
  width: var(--right-width, 200px);
  height: var(--right-height, 500px);
  left: 0;
}

/* === Inside Panels (fold-down) === */
.card-top, .card-bottom {
  position: absolute;
  left: 0;
  width: 100%;
  z-index: 1;
  overflow: hidden;
  background: var(--paper);
  border-radius: 3px;
}

.card-container.open .card-top,
.card-container.closing .card-top {
  width: var(--left-width, 200px);
  height: var(--left-height, 500px);
  bottom: 100%;
}

.card-container.open .card-bottom,
.card-container.closing .card-bottom {
  width: var(--right-width, 200px);
  height: var(--right-height, 500px);
  top: 0;
}

/* === Popup Cards === */
.popup-wrapper {
  position: absolute;
  inset: 0;
  z-index: 2;
  display: flex;
  align-items: flex-end;
  justify-content: center;
  opacity: 0;
  transform: translateY(1.5rem) scale(0.9);
  transition: opacity var(--transition-card), transform var(--transition-card);
  pointer-events: none;
}

.card-container.popup.open .popup-wrapper {
  opacity: 1;
  transform: translateY(-55%) scale(1);
}

.popup-content img {
  filter: drop-shadow(0 25px 40px var(--paper-shadow));
}

.popup-message {
  position: absolute;
  bottom: -15%;
  right: -30%;
  width: 60%;
}

/* === Artwork === */
.card-art {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: cover;
  pointer-events: none;
}

.card-art-loading, .card-art-missing {
  width: 100%;
  height: 100%;
  background: linear-gradient(135deg, var(--paper) 0%, var(--paper-edge) 100%);
}

.card-art-missing::after {
  content: '?';
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--ink-soft);
}

/* === Caption === */
.card-name {
  position: absolute;
  bottom: 7%;
  left: 0;
  right: 0;
  text-align: center;
  pointer-events: none;
  z-index: 150;
  transition: opacity var(--transition-card);
}

.card-name.hidden {
  opacity: 0;
}

.card-name h2 {
  font-family: var(--font-serif);
  font-weight: 500;
  font-size: 2rem;
  color: var(--lamplight);
  letter-spacing: 0.04em;
}

.card-occasion {
  margin-top: 0.35rem;
  font-size: 0.95rem;
  letter-spacing: 0.1em;
  color: var(--lamplight-soft);
}
"#;
