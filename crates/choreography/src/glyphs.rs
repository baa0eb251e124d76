//! Glyph pools the scramble machines draw noise characters from.

use rand::{Rng, RngCore};

const LATIN: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '!', '<',
    '>', '-', '_', '\\', '/', '[', ']', '{', '}', '=', '+', '*', '^', '?', '#', '%', '&', '@', '$',
    '~',
];

const KANA: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ',
    'ン',
];

/// Alphabet scramble noise is sampled from. The Japanese UI language switches
/// every scramble on the page to the kana pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Latin letters, digits, and keyboard symbols.
    #[default]
    Latin,
    /// Katakana.
    Kana,
}

impl GlyphSet {
    /// Draws one noise character from the pool.
    pub fn sample(self, rng: &mut dyn RngCore) -> char {
        let pool = match self {
            Self::Latin => LATIN,
            Self::Kana => KANA,
        };
        pool[rng.gen_range(0..pool.len())]
    }
}

/// Whitespace passes through every scramble untouched so word shapes stay
/// readable mid-animation.
pub(crate) fn passes_through(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn sample_stays_inside_the_pool() {
        let mut rng = StepRng::new(7, 0x9e37_79b9_7f4a_7c15);
        for _ in 0..64 {
            let latin = GlyphSet::Latin.sample(&mut rng);
            assert!(LATIN.contains(&latin));
            let kana = GlyphSet::Kana.sample(&mut rng);
            assert!(KANA.contains(&kana));
        }
    }

    #[test]
    fn whitespace_passes_through() {
        assert!(passes_through(' '));
        assert!(passes_through('\n'));
        assert!(!passes_through('a'));
    }
}
