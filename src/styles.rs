use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide stylesheet for the deck, mounted once next to the router.
#[function_component(DeckStyles)]
pub fn deck_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                min-height: 100vh;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                color: #ffffff;
                background: linear-gradient(135deg, #0f172a 0%, #581c87 50%, #0f172a 100%);
                background-attachment: fixed;
            }

            h1, h2, h3, h4, h5 {
                margin: 0 0 0.75rem 0;
                font-weight: 700;
            }

            p {
                margin: 0 0 1rem 0;
                line-height: 1.6;
            }

            .top-nav-wrapper {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
            }

            .top-nav {
                background: rgba(0, 0, 0, 0.2);
                backdrop-filter: blur(16px);
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            }

            .nav-content {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                height: 4rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .nav-brand {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-size: 1.25rem;
                font-weight: 700;
            }

            .nav-links {
                display: flex;
                gap: 0.25rem;
            }

            .nav-link {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 0.75rem;
                border: none;
                border-radius: 0.5rem;
                background: transparent;
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.875rem;
                font-weight: 500;
                cursor: pointer;
                transition: all 0.2s ease;
            }

            .nav-link:hover {
                color: #ffffff;
                background: rgba(255, 255, 255, 0.1);
            }

            .nav-link.active {
                color: #ffffff;
                background: rgba(255, 255, 255, 0.2);
            }

            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 4px;
                padding: 0.5rem;
                border: none;
                background: transparent;
                cursor: pointer;
            }

            .burger-menu span {
                display: block;
                width: 24px;
                height: 2px;
                background: #ffffff;
            }

            .deck-main {
                padding-top: 5rem;
            }

            .deck-section {
                min-height: 100vh;
                opacity: 0;
                transition: opacity 0.6s ease-out;
            }

            .deck-section.revealed {
                opacity: 1;
            }

            .deck-error {
                max-width: 40rem;
                margin: 20vh auto;
                text-align: center;
            }

            .section-inner {
                max-width: 80rem;
                margin: 0 auto;
                padding: 5rem 1.5rem;
            }

            .hero {
                min-height: 80vh;
                display: flex;
                flex-direction: column;
                justify-content: center;
                text-align: center;
                gap: 3rem;
            }

            .hero h1 {
                font-size: 3.75rem;
            }

            .hero-subtitle {
                font-size: 1.5rem;
                color: rgba(255, 255, 255, 0.8);
            }

            .section-header {
                text-align: center;
                margin-bottom: 4rem;
            }

            .section-header h2 {
                font-size: 3rem;
            }

            .lead {
                font-size: 1.25rem;
                color: rgba(255, 255, 255, 0.8);
                max-width: 48rem;
                margin: 0 auto;
            }

            .block {
                margin-bottom: 4rem;
            }

            .block-title {
                font-size: 1.875rem;
                text-align: center;
                margin-bottom: 2rem;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
            }

            .grid {
                display: grid;
                gap: 1.5rem;
            }

            .grid.wide-gap, .stack.wide-gap {
                gap: 2rem;
            }

            .cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
            .cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
            .cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

            .stack {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }

            .card {
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(16px);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 1rem;
                padding: 2rem;
            }

            .card.hoverable {
                transition: background 0.3s ease;
            }

            .card.hoverable:hover {
                background: rgba(255, 255, 255, 0.15);
            }

            .card.subtle {
                background: rgba(255, 255, 255, 0.05);
                border: none;
            }

            .gradient {
                background: linear-gradient(90deg, rgba(147, 51, 234, 0.2), rgba(37, 99, 235, 0.2));
            }

            .gradient-positive {
                background: linear-gradient(90deg, rgba(22, 163, 74, 0.2), rgba(37, 99, 235, 0.2));
                border: 1px solid rgba(34, 197, 94, 0.3);
            }

            .gradient-danger {
                background: linear-gradient(90deg, rgba(220, 38, 38, 0.2), rgba(234, 88, 12, 0.2));
                border: 1px solid rgba(239, 68, 68, 0.3);
            }

            .gradient-strong {
                background: linear-gradient(90deg, #9333ea, #2563eb);
            }

            .banner {
                text-align: center;
                border-radius: 1rem;
                padding: 3rem 2rem;
            }

            .banner p {
                max-width: 56rem;
                margin: 0 auto;
                font-size: 1.125rem;
                color: rgba(255, 255, 255, 0.9);
            }

            .panel {
                background: rgba(255, 255, 255, 0.05);
                border-radius: 0.5rem;
                padding: 1.5rem;
            }

            .panel.tone-positive {
                padding: 0.75rem;
            }

            .pill {
                padding: 0.5rem 1rem;
                border-radius: 9999px;
                background: rgba(255, 255, 255, 0.2);
                font-weight: 600;
            }

            .centered { text-align: center; }
            .center { text-align: center; }
            .grow { flex: 1; }
            .strong { font-weight: 600; }
            .small { font-size: 0.875rem; }
            .muted { color: rgba(255, 255, 255, 0.8); }
            .faint { color: rgba(255, 255, 255, 0.5); }
            .accent { color: #d8b4fe; }
            .positive { color: #86efac; }
            .danger { color: #f87171; }
            .info { color: #60a5fa; }
            .highlight { color: #fde047; }

            .spread {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
            }

            .card-head {
                display: flex;
                align-items: center;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }

            .row-card {
                display: flex;
                align-items: flex-start;
                gap: 1rem;
            }

            .row-tile {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                padding: 0.75rem;
                border-radius: 0.5rem;
                background: rgba(255, 255, 255, 0.05);
            }

            .row-tile.bare {
                padding: 0;
                background: transparent;
            }

            .impact-line {
                display: flex;
                align-items: center;
                gap: 0.5rem;
            }

            .badge-row {
                display: flex;
                flex-wrap: wrap;
                gap: 0.5rem;
            }

            .badge {
                display: inline-block;
                padding: 0.25rem 0.75rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                font-weight: 600;
                white-space: nowrap;
            }

            .tone-positive { background: rgba(22, 163, 74, 0.3); color: #bbf7d0; }
            .tone-caution { background: rgba(202, 138, 4, 0.3); color: #fef08a; }
            .tone-warning { background: rgba(234, 88, 12, 0.3); color: #fed7aa; }
            .tone-danger { background: rgba(220, 38, 38, 0.3); color: #fecaca; }
            .tone-info { background: rgba(37, 99, 235, 0.3); color: #bfdbfe; }
            .tone-accent { background: rgba(147, 51, 234, 0.3); color: #e9d5ff; }

            .phase-head {
                border-radius: 0.5rem;
                padding: 1rem;
                margin-bottom: 0.75rem;
            }

            .status-dot {
                width: 1rem;
                height: 1rem;
                border-radius: 9999px;
                flex-shrink: 0;
                margin-top: 0.25rem;
            }

            .status-dot.tone-danger { background: #ef4444; }
            .status-dot.tone-caution { background: #eab308; }
            .status-dot.tone-positive { background: #22c55e; }

            .dot-list, .icon-list {
                list-style: none;
                margin: 0;
                padding: 0;
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
            }

            .dot-list li {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                color: rgba(255, 255, 255, 0.8);
                font-size: 0.875rem;
            }

            .dot-list li::before {
                content: "";
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background: #c084fc;
                flex-shrink: 0;
            }

            .icon-list li {
                display: flex;
                align-items: flex-start;
                gap: 0.75rem;
                color: rgba(255, 255, 255, 0.8);
                font-size: 0.875rem;
            }

            .detail-row {
                display: flex;
                justify-content: space-between;
                gap: 1rem;
                margin-bottom: 0.5rem;
                font-size: 0.875rem;
            }

            .detail-label {
                color: rgba(255, 255, 255, 0.7);
            }

            .stat-tile {
                background: rgba(255, 255, 255, 0.1);
                border-radius: 0.5rem;
                padding: 1rem;
                text-align: center;
            }

            .stat-value {
                font-size: 1.875rem;
                font-weight: 700;
                margin-bottom: 0.5rem;
            }

            .stat-caption {
                color: rgba(255, 255, 255, 0.8);
                font-size: 0.875rem;
            }

            .stats-positive .stat-value {
                color: #4ade80;
            }

            .cta-row {
                display: flex;
                justify-content: center;
                flex-wrap: wrap;
                gap: 1rem;
                margin-top: 2rem;
            }

            .cta-row .stat-tile {
                background: rgba(255, 255, 255, 0.2);
            }

            .step-number {
                width: 2.5rem;
                height: 2.5rem;
                border-radius: 9999px;
                background: rgba(147, 51, 234, 0.3);
                display: flex;
                align-items: center;
                justify-content: center;
                font-weight: 700;
                flex-shrink: 0;
                margin: 0 auto 1rem auto;
            }

            .row-card .step-number {
                margin: 0;
            }

            .icon-disc {
                width: 3rem;
                height: 3rem;
                border-radius: 9999px;
                background: rgba(147, 51, 234, 0.3);
                display: flex;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
            }

            .icon-disc.large {
                width: 4rem;
                height: 4rem;
                margin: 0 auto 1rem auto;
                background: rgba(255, 255, 255, 0.1);
            }

            .icon {
                fill: none;
                stroke: currentColor;
                stroke-width: 2;
                stroke-linecap: round;
                stroke-linejoin: round;
                flex-shrink: 0;
            }

            .icon-sm { width: 1rem; height: 1rem; }
            .icon-inline { width: 2rem; height: 2rem; }
            .icon-md { width: 1.5rem; height: 1.5rem; }
            .icon-lg { width: 2rem; height: 2rem; }
            .icon-xl { width: 3rem; height: 3rem; margin-bottom: 1rem; }
            .icon-xxl { width: 4rem; height: 4rem; margin: 0 auto 1.5rem auto; display: block; }
            .icon-hero { width: 5rem; height: 5rem; margin: 0 auto 1.5rem auto; display: block; }

            .card.centered .icon-xl {
                margin-left: auto;
                margin-right: auto;
                display: block;
            }

            .table-wrap {
                overflow-x: auto;
            }

            .deck-table {
                width: 100%;
                border-collapse: collapse;
            }

            .deck-table th {
                text-align: left;
                font-weight: 600;
                padding: 1rem 0.5rem;
                border-bottom: 1px solid rgba(255, 255, 255, 0.2);
            }

            .deck-table td {
                padding: 1rem 0.5rem;
                border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            }

            .deck-table .center {
                text-align: center;
            }

            .score {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
            }

            .score-value {
                font-weight: 700;
            }

            .score-track {
                width: 4rem;
                height: 0.5rem;
                border-radius: 9999px;
                background: #374151;
            }

            .score-fill {
                height: 0.5rem;
                border-radius: 9999px;
            }

            .score-value.score-red { color: #f87171; }
            .score-value.score-green { color: #4ade80; }
            .score-value.score-blue { color: #60a5fa; }
            .score-fill.score-red { background: #f87171; }
            .score-fill.score-green { background: #4ade80; }
            .score-fill.score-blue { background: #60a5fa; }

            .chart canvas {
                width: 100%;
                height: auto;
                display: block;
            }

            @media (max-width: 1024px) {
                .cols-4 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                .nav-link span { display: none; }
            }

            @media (max-width: 768px) {
                .burger-menu {
                    display: flex;
                }

                .nav-links {
                    display: none;
                    position: absolute;
                    top: 4rem;
                    left: 0;
                    right: 0;
                    flex-direction: column;
                    padding: 1rem;
                    background: rgba(15, 23, 42, 0.95);
                }

                .nav-links.mobile-menu-open {
                    display: flex;
                }

                .nav-link span {
                    display: inline;
                }

                .cols-2, .cols-3, .cols-4 {
                    grid-template-columns: minmax(0, 1fr);
                }

                .hero h1 { font-size: 2.5rem; }
                .section-header h2 { font-size: 2.25rem; }
                .card { padding: 1.5rem; }
                .spread { flex-wrap: wrap; }
            }
        "#)} />
    }
}
