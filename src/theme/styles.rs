//! Global CSS styles for the Martian DMV.
//!
//! Holographic government-terminal look: Mars reds and oranges for
//! primary actions, alien neon and purple for everything else.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* MARS (Backgrounds, primary actions) */
  --mars-dark: #1a0b2e;
  --mars-dark-red: #3d0c11;
  --mars-red: #e63946;
  --mars-orange: #ff7f11;

  /* ALIEN (Secondary actions, highlights) */
  --mars-purple: #9b87f5;
  --mars-neon: #39ff14;
  --mars-green: #4ade80;
  --mars-blue: #38bdf8;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.75);
  --text-muted: rgba(245, 245, 245, 0.45);

  /* Typography */
  --font-display: 'Orbitron', 'Eurostile', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-4xl: 3.5rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  font-family: var(--font-mono);
  background: var(--mars-dark);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Page Shell === */
.page-shell {
  position: relative;
  z-index: 10;
  min-height: 100vh;
  padding: 3rem 1rem 4rem;
}

.page-main {
  max-width: 64rem;
  margin: 0 auto;
}

.button-row {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1.5rem;
}

.w-full {
  width: 100%;
}

/* === Header === */
.nav-header {
  max-width: 80rem;
  margin: 0 auto 2.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.alien-text {
  position: relative;
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--mars-red);
  letter-spacing: 0.1em;
}

.alien-text::after {
  content: attr(data-text);
  position: absolute;
  left: 2px;
  top: 0;
  color: var(--mars-neon);
  opacity: 0.4;
  clip-path: inset(0 0 55% 0);
  animation: glitch 3s steps(2) infinite;
}

.status-dot {
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  background: var(--mars-green);
  animation: pulse 2s ease-in-out infinite;
}

.nav-tabs {
  display: flex;
  list-style: none;
  gap: 1rem;
}

/* === Buttons === */
.button-mars,
.button-alien {
  font-family: var(--font-display);
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
  padding: 0.65rem 1.5rem;
  border-radius: 0.5rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal);
}

.button-mars {
  color: white;
  border: none;
  background: linear-gradient(135deg, var(--mars-red), var(--mars-orange));
  box-shadow: 0 0 12px rgba(230, 57, 70, 0.4);
}

.button-mars:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 0 20px rgba(255, 127, 17, 0.6);
}

.button-alien {
  color: var(--mars-neon);
  background: rgba(0, 0, 0, 0.4);
  border: 1px solid var(--mars-neon);
  box-shadow: 0 0 8px rgba(57, 255, 20, 0.25);
}

.button-alien:hover:not(:disabled) {
  background: rgba(57, 255, 20, 0.12);
}

.button-mars:disabled,
.button-alien:disabled {
  opacity: 0.7;
  cursor: wait;
}

.nav-tab {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  text-transform: uppercase;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  border: none;
  background: transparent;
  color: #9ca3af;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.nav-tab:hover {
  color: white;
}

.nav-tab.active {
  background: var(--mars-purple);
  color: white;
}

/* === Holographic Panels === */
.holographic {
  position: relative;
  overflow: hidden;
  background: rgba(26, 11, 46, 0.72);
  border: 1px solid rgba(155, 135, 245, 0.45);
  border-radius: 0.75rem;
  box-shadow: 0 0 24px rgba(155, 135, 245, 0.2), inset 0 0 30px rgba(57, 255, 20, 0.05);
  backdrop-filter: blur(6px);
}

.holographic::before {
  content: "";
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: repeating-linear-gradient(
    0deg,
    transparent 0,
    transparent 3px,
    rgba(155, 135, 245, 0.06) 3px,
    rgba(155, 135, 245, 0.06) 4px
  );
}

.widget {
  width: 100%;
  max-width: 32rem;
  margin: 0 auto;
  padding: 1.5rem;
}

.widget-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  text-align: center;
  color: var(--mars-neon);
  margin-bottom: 1rem;
}

.widget-lead {
  font-size: var(--text-sm);
  text-align: center;
  margin-bottom: 1.5rem;
}

.error-banner {
  background: rgba(230, 57, 70, 0.2);
  border: 1px solid var(--mars-red);
  border-radius: 0.375rem;
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
  text-align: center;
}

/* === Intro === */
.intro {
  max-width: 48rem;
  margin: 0 auto;
  text-align: center;
}

.intro-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.intro-subtitle {
  font-size: var(--text-xl);
  color: var(--mars-purple);
  margin-bottom: 2rem;
}

.intro-body {
  color: #d1d5db;
  margin-bottom: 2rem;
}

.system-notice {
  max-width: 28rem;
  margin: 0 auto 2rem;
  padding: 1rem;
  font-size: var(--text-xs);
}

.system-notice p + p {
  margin-top: 0.5rem;
}

.notice-heading {
  font-size: var(--text-sm);
  color: var(--mars-blue);
  margin-bottom: 1rem;
  animation: pulse 2s ease-in-out infinite;
}

.glitch-text {
  font-family: var(--font-display);
  color: var(--mars-neon);
  text-shadow: 2px 0 var(--mars-red), -2px 0 var(--mars-blue);
  animation: glitch 2.5s infinite;
}

/* === Step Frame === */
.step-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  text-align: center;
  color: var(--mars-neon);
  margin-bottom: 0.25rem;
}

.step-subtitle {
  text-align: center;
  color: #d1d5db;
  margin-bottom: 2rem;
}

/* === Form Controls === */
.form-field {
  margin-bottom: 1rem;
}

.input-label {
  display: block;
  font-size: var(--text-sm);
  color: #e5e7eb;
  margin-bottom: 0.25rem;
}

.input-mars {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  border: 1px solid var(--mars-purple);
  background: rgba(245, 245, 245, 0.92);
  color: #1f2937;
  font-family: var(--font-mono);
}

.input-mars:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--mars-neon);
}

.input-with-action {
  display: flex;
  gap: 0.5rem;
}

.input-with-action .input-mars {
  flex: 1;
}

.slider-mars {
  width: 100%;
  margin: 1rem 0;
  accent-color: var(--mars-purple);
}

.slider-ticks {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-xs);
  color: #9ca3af;
}

.radio-group {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.radio-item,
.checkbox-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.radio-item input,
.checkbox-mars {
  accent-color: var(--mars-neon);
}

.plasma-note {
  font-size: var(--text-xs);
  color: var(--mars-orange);
  margin-top: 0.5rem;
}

/* === Spinner === */
.spinner-row {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
}

.spinner {
  animation: spin 1s linear infinite;
}

.spinner-track {
  opacity: 0.25;
}

.spinner-head {
  opacity: 0.75;
}

/* === Queue Ticket === */
.ticket {
  text-align: center;
}

.ticket-position {
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.ticket-number {
  color: var(--mars-green);
  font-weight: 700;
  font-size: var(--text-xl);
}

.ticket-wait {
  font-size: var(--text-sm);
  margin-bottom: 1.5rem;
}

.progress-track {
  width: 100%;
  height: 0.5rem;
  background: #374151;
  border-radius: 9999px;
  margin-bottom: 1.5rem;
}

.progress-fill {
  height: 100%;
  background: var(--mars-purple);
  border-radius: 9999px;
  animation: pulse-glow 2s ease-in-out infinite;
}

/* === Photo Booth === */
.photo-frame {
  aspect-ratio: 1 / 1;
  max-width: 24rem;
  margin: 0 auto 1.5rem;
  border: 2px solid var(--mars-purple);
  border-radius: 0.5rem;
  overflow: hidden;
}

.photo-idle {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  padding: 1rem;
  text-align: center;
  background: rgba(0, 0, 0, 0.5);
}

.photo-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.feature-panel {
  margin-bottom: 1rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: rgba(0, 0, 0, 0.3);
}

.feature-panel h3 {
  font-size: var(--text-lg);
  color: var(--mars-neon);
  margin-bottom: 0.5rem;
}

.feature-panel ul {
  padding-left: 1.5rem;
}

/* === Captcha === */
.captcha-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.captcha-tile {
  position: relative;
  aspect-ratio: 1 / 1;
  border: 2px solid #374151;
  border-radius: 0.375rem;
  overflow: hidden;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.captcha-tile:hover {
  border-color: var(--mars-purple);
}

.captcha-tile.selected {
  border-color: var(--mars-neon);
  box-shadow: 0 0 14px rgba(57, 255, 20, 0.5);
  transform: scale(1.05);
}

.captcha-tile img {
  width: 100%;
  height: 100%;
  display: block;
}

.tile-check {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-2xl);
  color: white;
  background: rgba(57, 255, 20, 0.2);
}

.captcha-passed {
  text-align: center;
}

.check-badge {
  width: 5rem;
  height: 5rem;
  margin: 0 auto 1.5rem;
  border-radius: 50%;
  background: var(--mars-green);
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
}

.check-badge svg {
  width: 3rem;
  height: 3rem;
}

.passed-title {
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.passed-note {
  font-size: var(--text-sm);
  color: #d1d5db;
  margin-bottom: 1.5rem;
}

/* === Queue Combat === */
.queue-status {
  text-align: center;
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.queue-position {
  color: var(--mars-green);
  font-weight: 700;
}

.skip-message {
  font-size: var(--text-xs);
  color: var(--mars-orange);
}

.game-panel {
  text-align: center;
}

.game-panel > p {
  margin-bottom: 1rem;
}

.opponent-card {
  position: relative;
  width: 6rem;
  margin: 0 auto 2rem;
}

.opponent-portrait {
  width: 6rem;
  height: 6rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 2px solid var(--mars-purple);
  border-radius: 0.5rem;
  background: radial-gradient(circle, var(--mars-green), var(--mars-dark));
  font-family: var(--font-display);
  font-size: var(--text-2xl);
}

.opponent-name {
  position: absolute;
  left: 50%;
  bottom: -0.75rem;
  transform: translateX(-50%);
  white-space: nowrap;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-xs);
  background: var(--mars-dark);
  border: 1px solid var(--mars-purple);
  border-radius: 9999px;
}

.weapon-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.weapon-button {
  aspect-ratio: 1 / 1;
  background: rgba(0, 0, 0, 0.3);
  border: 2px solid var(--mars-purple);
  border-radius: 0.5rem;
  color: var(--text-primary);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.weapon-button:hover {
  background: rgba(0, 0, 0, 0.5);
  transform: scale(1.05);
}

.weapon-button p {
  font-size: var(--text-xs);
  margin-top: 0.25rem;
}

.weapon-icon {
  font-size: 2.25rem;
}

.rules-heading {
  font-size: var(--text-xs);
}

.rules {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  font-size: var(--text-xs);
  color: #d1d5db;
}

.duel {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 2.5rem;
  margin-bottom: 1rem;
}

.versus {
  font-size: var(--text-xl);
}

.result-banner {
  padding: 0.75rem;
  margin-bottom: 1.5rem;
  border-radius: 0.25rem;
}

.result-banner.win {
  background: rgba(74, 222, 128, 0.2);
  color: var(--mars-green);
}

.result-banner.lose {
  background: rgba(230, 57, 70, 0.2);
  color: var(--mars-red);
}

.result-banner.draw {
  background: rgba(107, 114, 128, 0.2);
  color: #d1d5db;
}

/* === Receptionist === */
.receptionist {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  max-width: 20rem;
  z-index: 50;
}

.speech-bubble {
  margin-bottom: 1rem;
  padding: 1rem;
  font-size: var(--text-sm);
  background: rgba(0, 0, 0, 0.6);
  border: 1px solid var(--mars-purple);
  border-radius: 0.5rem;
  backdrop-filter: blur(4px);
  animation: fade-in 0.3s ease-out;
}

.caret {
  animation: pulse 1s steps(2) infinite;
}

.receptionist-body {
  position: relative;
  width: 5rem;
  margin-left: auto;
  cursor: pointer;
}

.blob {
  width: 5rem;
  height: 5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--mars-purple), var(--mars-neon));
  transition: transform 0.5s ease-in-out;
  animation: pulse-glow 2s ease-in-out infinite;
}

.blob-eye {
  position: relative;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 50%;
  background: white;
}

.blob-pupil {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: black;
  transform: translate(-50%, -50%);
}

.receptionist-name {
  position: absolute;
  left: 50%;
  bottom: -0.5rem;
  transform: translateX(-50%);
  padding: 0.25rem 0.5rem;
  font-size: var(--text-xs);
  background: var(--mars-dark);
  border: 1px solid var(--mars-neon);
  border-radius: 9999px;
}

/* === Backdrop === */
.mars-background {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.mars-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, var(--mars-dark-red), var(--mars-dark));
}

.stars {
  position: absolute;
  inset: 0;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: white;
}

.terrain-chunk {
  position: absolute;
  border-radius: 40% 60% 55% 45%;
  background: radial-gradient(circle at 30% 30%, rgba(230, 57, 70, 0.35), rgba(61, 12, 17, 0.1));
  opacity: 0;
  animation: drift 20s ease-in-out infinite;
}

.asteroid {
  position: absolute;
  border-radius: 45% 55% 50% 50%;
  background: radial-gradient(circle at 35% 35%, #8b7d6b, #3b3024);
  box-shadow: inset -6px -6px 12px rgba(0, 0, 0, 0.6);
  animation-name: fly-across;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
}

.grid-overlay {
  position: absolute;
  inset: 0;
  opacity: 0.3;
  background-size: 30px 30px;
  background-image:
    linear-gradient(transparent 95%, rgba(155, 135, 245, 0.2) 50%),
    linear-gradient(90deg, transparent 95%, rgba(155, 135, 245, 0.2) 50%);
}

/* === Footer and Marquee === */
.page-footer {
  margin-top: 5rem;
  text-align: center;
  font-size: var(--text-xs);
  color: #6b7280;
}

.page-footer p + p {
  margin-top: 0.5rem;
}

.marquee {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  overflow: hidden;
  background: rgba(26, 11, 46, 0.8);
}

.marquee-track {
  display: inline-block;
  white-space: nowrap;
  padding: 0.25rem 0;
  font-size: var(--text-xs);
  color: var(--mars-orange);
  animation: marquee 60s linear infinite;
}

.marquee-gap {
  display: inline-block;
  width: 2rem;
}

/* === Animations === */
@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes pulse-glow {
  0%, 100% { box-shadow: 0 0 8px rgba(155, 135, 245, 0.5); }
  50% { box-shadow: 0 0 22px rgba(57, 255, 20, 0.7); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes flicker {
  0%, 100% { opacity: 1; }
  45% { opacity: 0.3; }
  55% { opacity: 0.9; }
}

@keyframes glitch {
  0%, 92%, 100% { transform: translate(0); }
  94% { transform: translate(-2px, 1px); }
  96% { transform: translate(2px, -1px); }
}

@keyframes drift {
  0% { opacity: 0; transform: translate(0, 0) rotate(0deg); }
  20% { opacity: 0.6; }
  80% { opacity: 0.6; }
  100% { opacity: 0; transform: translate(-60px, 40px) rotate(45deg); }
}

@keyframes fly-across {
  from { transform: translateX(0) rotate(0deg); }
  to { transform: translateX(calc(-100vw - 200px)) rotate(-540deg); }
}

@keyframes marquee {
  from { transform: translateX(100vw); }
  to { transform: translateX(-100%); }
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
