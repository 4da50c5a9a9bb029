/// What a navigation entry shows: plain text or one of the bundled icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkFace {
    Text,
    LinkedinIcon,
    XIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
    pub face: LinkFace,
}

pub const BRAND: &str = "fahmid";
pub const COPYRIGHT: &str = "© 2023 Fahmid";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Contact",
        href: "mailto:fahmid@xxcorpinc.com",
        external: false,
        face: LinkFace::Text,
    },
    NavLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/fahmidme",
        external: true,
        face: LinkFace::LinkedinIcon,
    },
    NavLink {
        label: "X",
        href: "https://x.com/hellofahmid",
        external: true,
        face: LinkFace::XIcon,
    },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Privacy Policy",
        href: "#",
        external: false,
        face: LinkFace::Text,
    },
    NavLink {
        label: "Terms of Service",
        href: "#",
        external: false,
        face: LinkFace::Text,
    },
];

const LINKEDIN_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='20' height='20' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z'/><rect width='4' height='12' x='2' y='9'/><circle cx='4' cy='4' r='2'/></svg>";

const X_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='16' height='16' fill='currentColor' viewBox='0 0 16 16'><path d='M12.6.75h2.454l-5.36 6.142L16 15.25h-4.937l-3.867-5.07-4.425 5.07H.316l5.733-6.57L0 .75h5.063l3.495 4.633L12.601.75Zm-.86 13.028h1.36L4.323 2.145H2.865z'/></svg>";

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn link_html(link: &NavLink) -> String {
    let href = escape_html(link.href);
    let label = escape_html(link.label);
    let target = if link.external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    match link.face {
        LinkFace::Text => format!("<a class=\"link\" href=\"{href}\"{target}>{label}</a>"),
        LinkFace::LinkedinIcon => {
            format!("<a class=\"link\" href=\"{href}\"{target} aria-label=\"{label}\">{LINKEDIN_SVG}</a>")
        }
        LinkFace::XIcon => {
            format!("<a class=\"link\" href=\"{href}\"{target} aria-label=\"{label}\">{X_SVG}</a>")
        }
    }
}

pub fn nav_html() -> String {
    let items: String = NAV_LINKS
        .iter()
        .map(|l| format!("<li>{}</li>", link_html(l)))
        .collect();
    format!(
        "<div class=\"brand\">{}</div><ul class=\"nav-links\">{}</ul>",
        escape_html(BRAND),
        items
    )
}

pub fn footer_html() -> String {
    let links: String = FOOTER_LINKS.iter().map(link_html).collect();
    format!(
        "<span>{}</span><div class=\"footer-links\">{}</div>",
        escape_html(COPYRIGHT),
        links
    )
}

/// One pager dot per slide; the active one is marked by the shell.
pub fn dots_html(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "<button class=\"dot\" data-index=\"{i}\" aria-label=\"Go to slide {}\"></button>",
                i + 1
            )
        })
        .collect()
}

/// Slide index carried by a dot's `data-index` attribute.
#[inline]
pub fn dot_index(attr: &str) -> Option<usize> {
    attr.trim().parse().ok()
}
