//! UI languages and the static translation table.

use choreography::GlyphSet;

/// Languages the whole site can switch between at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Language {
    /// Spanish, the launch default.
    #[default]
    Es,
    /// English.
    En,
    /// Japanese.
    Jp,
}

impl Language {
    pub(crate) const ALL: [Language; 3] = [Language::Es, Language::En, Language::Jp];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    /// Glyph pool every scramble on the page draws noise from.
    pub(crate) fn glyphs(self) -> GlyphSet {
        match self {
            Language::Jp => GlyphSet::Kana,
            _ => GlyphSet::Latin,
        }
    }
}

/// All localized copy for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Strings {
    pub(crate) greeting: &'static str,
    pub(crate) question: &'static str,
    pub(crate) yes: &'static str,
    pub(crate) no: &'static str,
    pub(crate) farewell: &'static str,
    pub(crate) off_notice: &'static str,
    pub(crate) welcome_title: &'static str,
    pub(crate) welcome_body: &'static str,
    pub(crate) subscribe_prompt: &'static str,
    pub(crate) subscribe_button: &'static str,
    pub(crate) subscribed_note: &'static str,
    pub(crate) about_title: &'static str,
    pub(crate) about_body: &'static str,
    pub(crate) shop_title: &'static str,
    pub(crate) shop_body: &'static str,
    pub(crate) footer_tag: &'static str,
    pub(crate) menu_language: &'static str,
    pub(crate) menu_replay: &'static str,
    pub(crate) menu_shutdown: &'static str,
    pub(crate) menu_crash: &'static str,
    pub(crate) close: &'static str,
}

const ES: Strings = Strings {
    greeting: "bienvenido",
    question: "deseas continuar?",
    yes: "si",
    no: "no",
    farewell: "hasta pronto",
    off_notice: "ya puedes apagar tu computadora.",
    welcome_title: "un mensaje",
    welcome_body: "hacemos sitios, sonido y cosas raras para internet.",
    subscribe_prompt: "tu correo:",
    subscribe_button: "suscribete",
    subscribed_note: "gracias. hablamos pronto.",
    about_title: "nosotros",
    about_body: "estudio unipersonal de diseno y codigo, desde 2017.",
    shop_title: "tienda",
    shop_body: "proximamente. por ahora, nada en venta.",
    footer_tag: "hecho a mano, sin plantillas",
    menu_language: "idioma",
    menu_replay: "repetir intro",
    menu_shutdown: "apagar",
    menu_crash: "no tocar",
    close: "cerrar",
};

const EN: Strings = Strings {
    greeting: "welcome",
    question: "will you continue?",
    yes: "yes",
    no: "no",
    farewell: "see you soon",
    off_notice: "it is now safe to turn off your computer.",
    welcome_title: "a message",
    welcome_body: "we make sites, sound and odd things for the internet.",
    subscribe_prompt: "your email:",
    subscribe_button: "subscribe",
    subscribed_note: "thanks. talk soon.",
    about_title: "about",
    about_body: "a one-person design and code studio, since 2017.",
    shop_title: "shop",
    shop_body: "coming soon. nothing for sale yet.",
    footer_tag: "handmade, no templates",
    menu_language: "language",
    menu_replay: "replay intro",
    menu_shutdown: "shut down",
    menu_crash: "do not touch",
    close: "close",
};

const JP: Strings = Strings {
    greeting: "ようこそ",
    question: "つづけますか?",
    yes: "はい",
    no: "いいえ",
    farewell: "またね",
    off_notice: "コンピュータの電源を切っても安全です。",
    welcome_title: "メッセージ",
    welcome_body: "サイトと音と、へんなものをつくっています。",
    subscribe_prompt: "メール:",
    subscribe_button: "とうろく",
    subscribed_note: "ありがとう。またすぐに。",
    about_title: "わたしたち",
    about_body: "ひとりのデザインとコードのスタジオ、2017年から。",
    shop_title: "ショップ",
    shop_body: "ちかじか。いまは何も売っていません。",
    footer_tag: "てづくり、テンプレートなし",
    menu_language: "げんご",
    menu_replay: "イントロさいせい",
    menu_shutdown: "シャットダウン",
    menu_crash: "さわらないで",
    close: "とじる",
};

pub(crate) fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
        Language::Jp => &JP,
    }
}

/// Indices into [`scramble_fields`], shared with the main-page render.
pub(crate) mod field {
    pub(crate) const WELCOME_TITLE: usize = 0;
    pub(crate) const WELCOME_BODY: usize = 1;
    pub(crate) const SUBSCRIBE_BUTTON: usize = 2;
    pub(crate) const ABOUT_TITLE: usize = 3;
    pub(crate) const ABOUT_BODY: usize = 4;
    pub(crate) const SHOP_TITLE: usize = 5;
    pub(crate) const SHOP_BODY: usize = 6;
    pub(crate) const FOOTER_TAG: usize = 7;
    pub(crate) const MENU_LANGUAGE: usize = 8;
    pub(crate) const MENU_REPLAY: usize = 9;
    pub(crate) const MENU_SHUTDOWN: usize = 10;
    pub(crate) const MENU_CRASH: usize = 11;
}

pub(crate) const SCRAMBLE_FIELD_COUNT: usize = 12;

/// The visible main-page texts, in the order the language-switch scramble
/// animates them.
pub(crate) fn scramble_fields(language: Language) -> [&'static str; SCRAMBLE_FIELD_COUNT] {
    let s = strings(language);
    [
        s.welcome_title,
        s.welcome_body,
        s.subscribe_button,
        s.about_title,
        s.about_body,
        s.shop_title,
        s.shop_body,
        s.footer_tag,
        s.menu_language,
        s.menu_replay,
        s.menu_shutdown,
        s.menu_crash,
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_language_fills_every_scramble_field() {
        for language in Language::ALL {
            let fields = scramble_fields(language);
            assert_eq!(fields.len(), SCRAMBLE_FIELD_COUNT);
            for text in fields {
                assert!(!text.is_empty(), "{language:?} has an empty field");
            }
        }
    }

    #[test]
    fn field_indices_line_up_with_the_table() {
        let fields = scramble_fields(Language::En);
        assert_eq!(fields[field::WELCOME_TITLE], EN.welcome_title);
        assert_eq!(fields[field::SHOP_BODY], EN.shop_body);
        assert_eq!(fields[field::MENU_CRASH], EN.menu_crash);
    }

    #[test]
    fn japanese_selects_the_kana_pool() {
        assert_eq!(Language::Jp.glyphs(), GlyphSet::Kana);
        assert_eq!(Language::Es.glyphs(), GlyphSet::Latin);
        assert_eq!(Language::En.glyphs(), GlyphSet::Latin);
    }
}
