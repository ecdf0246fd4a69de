use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::contact;
use crate::content::{Review, Service, Stat, REVIEWS, SERVICES, STATS};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <Hero />
            <Services />
            <Reviews />
            <About />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <div class="hero-badge">{"⚡ Fast & Reliable Service"}</div>
                <h2>
                    {"Electrical Problems?"}<br />
                    <span class="accent">{"Consider it Fixed!"}</span>
                </h2>
                <p class="hero-subtitle">
                    {"Professional wiring, repairs, and installation services for your home and office. One call does it all."}
                </p>
                <div class="hero-actions">
                    <a href={contact::call_link()} class="cta call" aria-label="Call Now">
                        <i class="fa-solid fa-phone"></i>{" Call Now"}
                    </a>
                    <a
                        href={contact::chat_link()}
                        target="_blank"
                        rel="noreferrer"
                        class="cta whatsapp"
                        aria-label="Chat on WhatsApp"
                    >
                        <i class="fa-brands fa-whatsapp"></i>{" WhatsApp"}
                    </a>
                </div>
            </div>
            <div class="hero-decor">
                <i class="fa-solid fa-bolt decor-left"></i>
                <i class="fa-solid fa-bolt decor-right"></i>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: &'static str,
    subtitle: &'static str,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{props.title}<div class="underline"></div></h2>
            <p>{props.subtitle}</p>
        </div>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="services">
            <SectionHeader title="Our Services" subtitle="We provide a wide range of electrical solutions" />
            <div class="services-grid">
                { for SERVICES.iter().map(service_card) }
            </div>
        </section>
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <div key={service.title} class="service-card">
            <div class="service-icon"><i class={service.icon.class()}></i></div>
            <h3>{service.title}</h3>
            <p>{service.desc}</p>
        </div>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    html! {
        <section id="reviews" class="reviews">
            <SectionHeader title="Customer Reviews" subtitle="See what our happy customers say about us" />
            <div class="reviews-grid">
                { for REVIEWS.iter().map(review_card) }
            </div>
        </section>
    }
}

fn review_card(review: &Review) -> Html {
    html! {
        <div key={review.name} class="review-card">
            <div class="stars">
                { for review.star_fill().into_iter().map(|filled| html! {
                    <i class={if filled { "fa-solid fa-star filled" } else { "fa-regular fa-star" }}></i>
                }) }
            </div>
            <p class="comment">{format!("\"{}\"", review.comment)}</p>
            <div class="reviewer">
                <div class="avatar"><i class="fa-solid fa-user"></i></div>
                <div>
                    <h4>{review.name}</h4>
                    <p>{review.location}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="about-content">
                <h2>{format!("Why Choose {}?", config::SHORT_NAME)}</h2>
                <p>
                    {config::BUSINESS_NAME}{" has been serving the community for over "}
                    <strong>{"10 years"}</strong>
                    {". We believe in honest pricing and high-quality work. Our technicians are experienced and follow strict safety protocols. From small repairs to full building contracts, we handle everything with care."}
                </p>
                <div class="stats-grid">
                    { for STATS.iter().map(stat_tile) }
                </div>
            </div>
            <div class="about-glow"></div>
        </section>
    }
}

fn stat_tile(stat: &Stat) -> Html {
    html! {
        <div key={stat.label} class="stat">
            <h3>{stat.value}</h3>
            <p>{stat.label}</p>
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id="contact" class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{config::SHORT_NAME}</h3>
                    <p>{"Your trusted partner for all electrical needs. Safe, Fast, and Affordable."}</p>
                </div>
                <div class="footer-item">
                    <div class="footer-icon"><i class="fa-solid fa-phone"></i></div>
                    <div>
                        <p class="footer-label">{"Call Us"}</p>
                        <a href={contact::call_link()} class="footer-value">{config::PHONE_NUMBER}</a>
                    </div>
                </div>
                <div class="footer-item">
                    <div class="footer-icon"><i class="fa-solid fa-location-dot"></i></div>
                    <div>
                        <p class="footer-label">{"Location"}</p>
                        <p class="footer-value">{config::LOCATION}</p>
                    </div>
                </div>
                <div class="footer-item">
                    <div class="footer-icon"><i class="fa-solid fa-clock"></i></div>
                    <div>
                        <p class="footer-label">{"Hours"}</p>
                        <p class="footer-value">{config::HOURS}</p>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All Rights Reserved.", year, config::BUSINESS_NAME)}</p>
                <p>{"Designed for Excellence ⚡"}</p>
            </div>
        </footer>
    }
}

const PAGE_CSS: &str = r#"
    .landing-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1f2937;
        background: #f9fafb;
        min-height: 100vh;
    }
    .hero {
        background: #fff;
        padding: 6rem 1rem;
        text-align: center;
        position: relative;
        overflow: hidden;
    }
    .hero-content {
        max-width: 56rem;
        margin: 0 auto;
        position: relative;
        z-index: 10;
    }
    .hero-badge {
        display: inline-block;
        padding: 0.5rem 1rem;
        background: #fef9c3;
        color: #854d0e;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        animation: bounce 1s infinite;
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }
    .hero h2 {
        font-size: 3.75rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 1.5rem;
        line-height: 1.2;
    }
    .accent {
        color: #eab308;
    }
    .hero-subtitle {
        color: #4b5563;
        font-size: 1.25rem;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .hero-actions {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    .cta {
        font-weight: 700;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        text-decoration: none;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: all 0.2s;
    }
    .cta:hover {
        transform: scale(1.05);
    }
    .cta.call {
        background: #eab308;
        color: #000;
    }
    .cta.whatsapp {
        background: #16a34a;
        color: #fff;
    }
    .hero-decor {
        position: absolute;
        inset: 0;
        opacity: 0.05;
        pointer-events: none;
        color: #eab308;
    }
    .decor-left {
        position: absolute;
        top: 5rem;
        left: 2.5rem;
        font-size: 10rem;
        transform: rotate(12deg);
    }
    .decor-right {
        position: absolute;
        bottom: 5rem;
        right: 2.5rem;
        font-size: 15rem;
        transform: rotate(-12deg);
    }
    .services, .reviews {
        padding: 5rem 1rem;
    }
    .reviews {
        background: #fff;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-header h2 {
        display: inline-block;
        position: relative;
        font-size: 2.25rem;
        font-weight: 700;
        color: #111827;
    }
    .section-header .underline {
        position: absolute;
        bottom: -1rem;
        left: 50%;
        transform: translateX(-50%);
        height: 0.25rem;
        width: 6rem;
        background: #eab308;
        border-radius: 9999px;
    }
    .section-header p {
        margin-top: 1.5rem;
        color: #4b5563;
    }
    .services-grid, .reviews-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .service-card {
        background: #fff;
        padding: 2rem;
        border-radius: 0.75rem;
        border-top: 4px solid #eab308;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        transition: all 0.3s;
    }
    .service-card:hover {
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transform: translateY(-0.25rem);
    }
    .service-icon {
        display: inline-block;
        padding: 0.75rem;
        background: #fefce8;
        color: #ca8a04;
        border-radius: 0.5rem;
        font-size: 2rem;
        margin-bottom: 1rem;
        transition: all 0.3s;
    }
    .service-card:hover .service-icon {
        background: #eab308;
        color: #fff;
    }
    .service-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 0.5rem;
    }
    .service-card p {
        color: #4b5563;
        line-height: 1.6;
    }
    .review-card {
        background: #f9fafb;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid #f3f4f6;
    }
    .stars {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 0.75rem;
        color: #d1d5db;
    }
    .stars .filled {
        color: #facc15;
    }
    .comment {
        color: #374151;
        font-style: italic;
        margin-bottom: 1.5rem;
    }
    .reviewer {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .avatar {
        background: #e5e7eb;
        color: #6b7280;
        padding: 0.5rem 0.6rem;
        border-radius: 9999px;
    }
    .reviewer h4 {
        margin: 0;
        font-size: 0.875rem;
        font-weight: 700;
    }
    .reviewer p {
        margin: 0;
        font-size: 0.75rem;
        color: #6b7280;
    }
    .about {
        padding: 5rem 1rem;
        background: #111827;
        color: #fff;
        position: relative;
        overflow: hidden;
    }
    .about-content {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
        position: relative;
        z-index: 10;
    }
    .about h2 {
        font-size: 1.875rem;
        color: #facc15;
        margin-bottom: 1.5rem;
    }
    .about-content > p {
        color: #d1d5db;
        font-size: 1.125rem;
        line-height: 1.7;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .stat {
        padding: 1rem;
        background: #1f2937;
        border-radius: 0.5rem;
    }
    .stat h3 {
        font-size: 1.5rem;
        color: #eab308;
        margin: 0;
    }
    .stat p {
        font-size: 0.875rem;
        color: #9ca3af;
        margin: 0;
    }
    .about-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 16rem;
        height: 16rem;
        background: #eab308;
        opacity: 0.05;
        border-radius: 9999px;
        filter: blur(64px);
        transform: translate(50%, -50%);
    }
    .footer {
        background: #000;
        color: #fff;
        padding: 4rem 1rem 2rem;
        border-top: 1px solid #1f2937;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto 3rem;
    }
    .footer-brand h3 {
        color: #eab308;
        font-size: 1.25rem;
    }
    .footer-brand p {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .footer-item {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .footer-icon {
        background: #1f2937;
        color: #eab308;
        padding: 0.5rem 0.6rem;
        border-radius: 9999px;
    }
    .footer-label {
        color: #6b7280;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin: 0;
    }
    .footer-value {
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
        margin: 0;
    }
    a.footer-value:hover {
        color: #facc15;
    }
    .footer-bottom {
        max-width: 72rem;
        margin: 0 auto;
        border-top: 1px solid #1f2937;
        padding-top: 2rem;
        display: flex;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #6b7280;
    }
    @media (max-width: 1023px) {
        .services-grid, .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 767px) {
        .hero {
            padding: 4rem 1rem;
        }
        .hero h2 {
            font-size: 2.25rem;
        }
        .hero-actions {
            flex-direction: column;
        }
        .services-grid, .reviews-grid, .footer-grid {
            grid-template-columns: 1fr;
        }
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .footer-grid, .footer-bottom {
            text-align: center;
            flex-direction: column;
            align-items: center;
        }
    }
"#;
