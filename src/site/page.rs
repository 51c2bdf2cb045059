use super::gallery::ImageReference;
use super::game::{GameRecord, Totals};
use super::nav::{NavState, Section, ViewLine};
use std::fmt::Write;

const STUDIO_NAME: &str = "Yanns Studios";
const DEFAULT_DESCRIPTION: &str = "Explore and have fun in this experience.";
const ROBLOX_PROFILE_URL: &str = "https://www.roblox.com/users/20896161/profile";
const DISCORD_URL: &str = "https://discord.com/users/yann4";
const DISCORD_HANDLE: &str = "yann4";

/// Seconds per loop for each marquee row
const MARQUEE_DURATIONS: [u32; 2] = [34, 40];

/// Everything the page needs for one render
#[derive(Debug, Clone)]
pub struct Page {
    pub gallery: Vec<ImageReference>,
    pub games: Vec<GameRecord>,
    pub totals: Totals,
    pub nav: NavState,
    /// Rendered height of the fixed header in px
    pub header_height: f64,
    pub view_line: ViewLine,
    pub year: i32,
}

impl Page {
    /// The view line is derived from `header_height`, which also sizes the
    /// header in the stylesheet.
    pub fn new(
        gallery: Vec<ImageReference>,
        games: Vec<GameRecord>,
        header_height: f64,
        year: i32,
    ) -> Self {
        let totals = Totals::from_games(&games);
        Self {
            gallery,
            games,
            totals,
            nav: NavState::default(),
            header_height,
            view_line: ViewLine::below_header(header_height),
            year,
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{STUDIO_NAME}</title>");
        let _ = writeln!(
            html,
            "<style>:root{{--header-height:{}px}}{STYLES}</style>",
            self.header_height
        );
        html.push_str("</head>\n");
        let _ = writeln!(
            html,
            r#"<body id="top" data-view-line="{}">"#,
            self.view_line.px()
        );

        self.render_header(&mut html);
        self.render_hero(&mut html);
        self.render_games(&mut html);
        self.render_find(&mut html);

        let _ = writeln!(html, "<script>{NAV_SCRIPT}</script>");
        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_header(&self, html: &mut String) {
        html.push_str(r#"<header class="nav"><div class="brand">"#);
        let _ = write!(
            html,
            r#"<img src="/images/pfp.png" alt="{STUDIO_NAME} logo" width="44" height="44"><span>{STUDIO_NAME}</span>"#
        );
        html.push_str("</div><nav>");
        for section in Section::ALL {
            let class = if self.nav.is_active(section) {
                "nav-link active"
            } else {
                "nav-link"
            };
            let _ = write!(
                html,
                r#"<a class="{class}" href="{}" data-section="{}">{}</a>"#,
                section.href(),
                section.id(),
                escape(section.label())
            );
        }
        html.push_str("</nav></header>\n");
    }

    fn render_hero(&self, html: &mut String) {
        html.push_str(r#"<section class="hero"><div class="marquee-wrap" aria-hidden="true">"#);
        for (row, duration) in MARQUEE_DURATIONS.iter().enumerate() {
            let reverse = if row == 1 { " marquee--reverse" } else { "" };
            let _ = write!(
                html,
                r#"<div class="marquee{reverse}"><div class="marquee__inner" style="--marquee-duration: {duration}s">"#
            );
            // Two copies so the loop wraps without a gap
            for src in self.gallery.iter().chain(self.gallery.iter()) {
                let _ = write!(
                    html,
                    r#"<div class="marquee__item"><div class="marquee__card" style="background-image: linear-gradient(135deg, rgba(0,0,0,0.28), rgba(0,0,0,0.12)), url('{}')"></div></div>"#,
                    escape(&css_url_path(src))
                );
            }
            html.push_str("</div></div>");
        }
        html.push_str("</div>");
        html.push_str(
            r##"<main class="hero-content"><h1>Creating games that players enjoy.</h1><p>Providing polished, engaging, and enjoyable gameplay.</p><div class="cta"><a class="btn btn-primary" href="#games">Our Games</a><a class="btn btn-light" href="#find">Contact / Find Me</a></div></main>"##,
        );
        html.push_str("</section>\n");
    }

    fn render_games(&self, html: &mut String) {
        html.push_str(r#"<section id="games" class="games">"#);
        let _ = write!(
            html,
            r#"<div class="totals"><div class="tile"><p class="tile-value" data-total="visits">{}</p><p class="tile-label">Total Visits</p></div><div class="tile"><p class="tile-value" data-total="playing">{}</p><p class="tile-label">Active Players</p></div></div>"#,
            format_count(self.totals.visits),
            format_count(self.totals.playing)
        );
        html.push_str(r#"<h2>My Games</h2><div class="rule"></div><div class="cards">"#);
        for game in &self.games {
            render_card(html, game);
        }
        html.push_str("</div></section>\n");
    }

    fn render_find(&self, html: &mut String) {
        html.push_str(r#"<section id="find" class="find"><h2>Find Me</h2><div class="rule"></div><div class="links">"#);
        let _ = write!(
            html,
            r#"<a class="link-card" href="{ROBLOX_PROFILE_URL}" target="_blank" rel="noopener noreferrer"><img src="/images/roblox icon.png" alt="Roblox icon" width="22" height="22"><div><p class="link-title">Roblox Profile</p><p class="link-sub">View User</p></div><span>&rarr;</span></a>"#
        );
        let _ = write!(
            html,
            r#"<a class="link-card" href="{DISCORD_URL}" target="_blank" rel="noopener noreferrer"><span class="discord">{DISCORD_ICON}</span><div><p class="link-title">Discord</p><p class="link-sub">{DISCORD_HANDLE}</p></div><span>&rarr;</span></a>"#
        );
        html.push_str("</div>");
        let _ = write!(
            html,
            r#"<footer><div class="brand"><img src="/images/pfp.png" alt="{STUDIO_NAME} logo" width="32" height="32"><span>{STUDIO_NAME}</span></div><span>&copy; {} {STUDIO_NAME}. All rights reserved.</span></footer>"#,
            self.year
        );
        html.push_str("</section>\n");
    }
}

fn render_card(html: &mut String, game: &GameRecord) {
    let title = escape(&game.title);
    let description = game.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let _ = write!(
        html,
        r#"<article class="card" data-place-id="{}"><img class="cover" src="{}" alt="{title}"><div class="card-body"><h3>{title}</h3><div class="counters"><span class="playing">{PLAYERS_ICON}{}</span><span class="visits">{VISITS_ICON}{}</span></div><p class="description">{}</p><a class="play" href="{}" target="_blank" rel="noopener noreferrer"><img src="/images/roblox icon.png" alt="Roblox icon" width="18" height="18">View on Roblox</a></div></article>"#,
        game.place_id,
        escape(&game.cover),
        format_count(game.playing.unwrap_or(0)),
        format_count(game.visits.unwrap_or(0)),
        escape(description),
        escape(&game.url),
    );
}

/// Group digits in threes with commas, e.g. `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percent-encode characters that would end a quoted CSS `url()` early
pub fn css_url_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            ' ' => out.push_str("%20"),
            '\\' => out.push_str("%5C"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PLAYERS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon"><path d="M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z"/></svg>"#;

const VISITS_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon"><path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5S10.62 6.5 12 6.5s2.5 1.12 2.5 2.5S13.38 11.5 12 11.5z"/></svg>"#;

const DISCORD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon-lg"><path d="M20 0H4C1.8 0 0 1.8 0 4v16c0 2.2 1.8 4 4 4h16c2.2 0 4-1.8 4-4V4c0-2.2-1.8-4-4-4Zm-3.3 17.1s-.3-.4-.5-.8c1-.3 1.4-1 1.4-1 .3-.5.4-1 .4-1-.5.4-1 .7-1 .7-.6.3-1.2.4-1.7.3h-.1c-.1 0-.2-.1-.2-.1-.1-.1-.1-.2-.1-.2.1-.1.2-.1.2-.1 1.1-.2 1.6-.6 1.6-.6 0 0 .7-.5 1.2-1.6 0 0 .2-.5.3-1.5 0 0 .1-1.1-.4-2 0 0-.7-1.2-2.3-1.3l-.3-.1s-.2 0-.4.1c-.4-.1-1-.2-1.7-.2-.9 0-1.8.1-2.7.4 0 0-.5-.4-1.1-.5 0 0-.9-.1-2 .7 0 0-.7.8-1 2.5 0 0-.1.9.3 2 0 0 .5 1.1 1.7 1.6 0 0 .5.3 1.6.5 0 0 .1 0 .2.1 0 0 0 .1-.1.2 0 0 0 .1-.2.1-.6.1-1.2 0-1.7-.3 0 0-.4-.3-1-.7 0 0-.1 0 .4 1 0 0 .4.7 1.4 1 0 0-.2.3-.5.8 0 0-.9.1-1.8-.6 0 0-.1 0-.2-.1v.1c0 .1.1 0 .1.1 0 0 .5.7 1.9 1.2 0 0 1.1.4 2.5.5 0 0 .8.1 1.9-.1.4-.1.8-.1 1.2-.3 0 0 .1 0 .1-.1Zm-5.6-4.4c-.6 0-1.1-.5-1.1-1.1 0-.6.5-1.1 1.1-1.1.6 0 1.1.5 1.1 1.1 0 .7-.5 1.1-1.1 1.1Zm3.2 0c-.6 0-1.1-.5-1.1-1.1 0-.6.5-1.1 1.1-1.1.6 0 1.1.5 1.1 1.1-.1.7-.5 1.1-1.1 1.1Z"/></svg>"#;

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;background:#05060d;color:#fff;font-family:system-ui,sans-serif}
a{color:inherit;text-decoration:none}
.nav{position:fixed;inset:0 0 auto 0;z-index:40;height:var(--header-height);display:flex;align-items:center;justify-content:space-between;padding:0 2.5rem;background:rgba(11,16,32,.95);border-bottom:1px solid rgba(255,255,255,.1);backdrop-filter:blur(16px)}
.brand{display:flex;align-items:center;gap:.75rem;font-weight:600}
.brand img{border-radius:50%;object-fit:cover}
.nav nav{display:flex;gap:2rem;font-size:.875rem}
.nav-link{color:rgba(255,255,255,.8);transition:color .2s}
.nav-link.active{color:#2d6cf7}
.hero{position:relative;min-height:100vh;overflow:hidden;background:linear-gradient(#0f172a,#090d1a,#060814)}
.marquee-wrap{position:absolute;inset:0;display:flex;flex-direction:column;gap:1.5rem;padding-top:5rem;opacity:.55}
.marquee{overflow:hidden}
.marquee__inner{display:flex;gap:1.5rem;width:max-content;animation:marquee var(--marquee-duration) linear infinite}
.marquee--reverse .marquee__inner{animation-direction:reverse}
.marquee__card{width:320px;height:200px;border-radius:1.25rem;background-size:cover;background-position:center}
@keyframes marquee{from{transform:translateX(0)}to{transform:translateX(-50%)}}
.hero-content{position:relative;z-index:10;min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:8rem 1.5rem 7rem}
.hero-content h1{font-size:3.5rem;margin:0;max-width:56rem}
.hero-content p{color:rgba(255,255,255,.8);font-size:1.25rem}
.cta{display:flex;gap:1.25rem;margin-top:2.5rem}
.btn{display:inline-flex;align-items:center;height:3rem;padding:0 2rem;border-radius:999px;font-weight:600;font-size:.875rem}
.btn-primary{background:#2d6cf7}
.btn-light{background:#fff;color:#0b1020}
section{scroll-margin-top:6rem}
.games,.find{display:flex;flex-direction:column;align-items:center;padding:4rem 2.5rem 7rem}
.totals{display:grid;grid-template-columns:1fr 1fr;gap:.75rem;width:100%;max-width:48rem}
.tile{border:1px solid rgba(255,255,255,.1);background:rgba(255,255,255,.05);border-radius:.75rem;padding:1rem 1.5rem;text-align:center}
.tile-value{font-size:1.5rem;font-weight:700;color:#4ea3ff;margin:0}
.tile-label{font-size:.75rem;font-weight:600;letter-spacing:.18em;text-transform:uppercase;color:rgba(255,255,255,.7)}
h2{font-size:2.25rem;margin:3rem 0 .5rem}
.rule{height:2px;width:4rem;border-radius:999px;background:#2d6cf7}
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:2rem;width:100%;max-width:72rem;margin-top:3rem}
.card{overflow:hidden;border-radius:1.5rem;border:1px solid rgba(255,255,255,.1);background:rgba(12,16,29,.8)}
.cover{width:100%;height:18rem;object-fit:cover}
.card-body{display:flex;flex-direction:column;gap:1rem;padding:1.25rem 1.5rem}
.card-body h3{margin:0}
.counters{display:flex;gap:1rem;font-size:.875rem;color:rgba(255,255,255,.8)}
.counters span{display:flex;align-items:center;gap:.375rem}
.icon{width:1rem;height:1rem}
.icon-lg{width:1.5rem;height:1.5rem}
.description{font-size:.875rem;color:rgba(255,255,255,.7)}
.play{display:flex;align-items:center;justify-content:center;gap:.75rem;height:3rem;border-radius:.75rem;background:#1c2336;color:#4ea3ff;font-weight:600;font-size:.875rem}
.play:hover{background:#2d6cf7;color:#fff}
.links{display:grid;grid-template-columns:1fr 1fr;gap:1.5rem;width:100%;max-width:64rem;margin-top:2.5rem}
.link-card{display:flex;align-items:center;justify-content:space-between;gap:1rem;border-radius:1rem;border:1px solid rgba(255,255,255,.1);background:rgba(15,20,36,.8);padding:1.25rem 1.5rem}
.link-title{font-weight:600;margin:0}
.link-sub{font-size:.875rem;color:rgba(255,255,255,.7);margin:0}
.discord{display:flex;color:#5865f2}
footer{display:flex;justify-content:space-between;align-items:center;width:100%;max-width:72rem;margin-top:3rem;font-size:.75rem;color:rgba(255,255,255,.6)}
"#;

// Mirrors nav::active_section: last section spanning the view line wins,
// falling back to the first.
const NAV_SCRIPT: &str = r#"
(function () {
  var line = parseFloat(document.body.dataset.viewLine) || 160;
  var links = Array.prototype.slice.call(document.querySelectorAll(".nav-link"));
  function mark(id) {
    links.forEach(function (a) { a.classList.toggle("active", a.dataset.section === id); });
  }
  function onScroll() {
    var current = links.length ? links[0].dataset.section : null;
    links.forEach(function (a) {
      var el = document.getElementById(a.dataset.section);
      if (!el) return;
      var rect = el.getBoundingClientRect();
      if (rect.top <= line && rect.bottom >= line) current = a.dataset.section;
    });
    mark(current);
  }
  links.forEach(function (a) {
    a.addEventListener("click", function (e) {
      e.preventDefault();
      mark(a.dataset.section);
      var target = document.getElementById(a.dataset.section);
      if (target) target.scrollIntoView({ behavior: "smooth", block: "start" });
    });
  });
  onScroll();
  window.addEventListener("scroll", onScroll, { passive: true });
})();
"#;
