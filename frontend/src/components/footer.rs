use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Link, SECTION_LINKS, SUPPORT_LINKS};
use crate::motion::Entrance;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Meditox. All rights reserved.", year)
}

fn link_list(links: &[Link]) -> Html {
    html! {
        <ul class="footer-links">
            { for links.iter().map(|link| html! {
                <li><a href={link.href}>{link.label}</a></li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-container">
                <Reveal entrance={Entrance::fade_up()} class={classes!("footer-grid")}>
                    <div>
                        <div class="footer-brand">
                            <span class="footer-brand-icon">{"⚗️"}</span>
                            <span class="footer-brand-name">{"Meditox"}</span>
                        </div>
                        <p class="footer-muted">{"Revolutionizing chemist shop management across India"}</p>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        { link_list(SECTION_LINKS) }
                    </div>

                    <div>
                        <h3>{"Support"}</h3>
                        { link_list(SUPPORT_LINKS) }
                    </div>

                    <div>
                        <h3>{"Stay Updated"}</h3>
                        <p class="footer-muted">{"Subscribe to our newsletter for updates and tips"}</p>
                        // Static for now; there is no newsletter endpoint behind it.
                        <div class="newsletter">
                            <input type="email" placeholder="Your email" />
                            <button type="button">{"Subscribe"}</button>
                        </div>
                    </div>
                </Reveal>

                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #2D5016;
                        color: #ffffff;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .footer-grid h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 0 0 1rem 0;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-brand-icon {
                        font-size: 1.75rem;
                    }
                    .footer-brand-name {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .footer-muted {
                        color: rgba(255, 255, 255, 0.8);
                        margin: 0 0 1rem 0;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-links a:hover {
                        color: #ffffff;
                    }
                    .newsletter {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #ffffff;
                    }
                    .newsletter input::placeholder {
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .newsletter button {
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        color: #ffffff;
                        background: #6BA547;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .newsletter button:hover {
                        background: #4A7C2C;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 2rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 Meditox. All rights reserved.");
    }
}
