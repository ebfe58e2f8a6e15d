fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SplashTypewriter<'a> {
    text: &'a str,
    start_ms: f64,
    per_char_ms: f64,
}

impl<'a> SplashTypewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            start_ms: 1_000.0,
            per_char_ms: 100.0,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The first character lands the moment typing starts.
    pub fn visible_chars(&self, elapsed_ms: f64) -> usize {
        if elapsed_ms < self.start_ms {
            return 0;
        }

        let typed = ((elapsed_ms - self.start_ms) / self.per_char_ms).floor() as usize + 1;
        typed.min(self.char_count())
    }

    pub fn text_at(&self, elapsed_ms: f64) -> &'a str {
        prefix(self.text, self.visible_chars(elapsed_ms))
    }

    pub fn finished_at_ms(&self) -> f64 {
        self.start_ms + self.char_count() as f64 * self.per_char_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterFrame<'a> {
    pub text: &'a str,
    pub opacity: f64,
    pub phrase_index: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct CyclingTypewriter<'a> {
    phrases: &'a [&'a str],
    start_ms: f64,
    type_ms: f64,
    hold_ms: f64,
    fade_ms: f64,
}

impl<'a> CyclingTypewriter<'a> {
    pub fn new(phrases: &'a [&'a str]) -> Self {
        Self {
            phrases,
            start_ms: 2_000.0,
            type_ms: 800.0,
            hold_ms: 2_000.0,
            fade_ms: 500.0,
        }
    }

    pub fn cycle_ms(&self) -> f64 {
        self.type_ms + self.hold_ms + self.fade_ms
    }

    pub fn frame(&self, elapsed_ms: f64) -> TypewriterFrame<'a> {
        let blank = TypewriterFrame {
            text: "",
            opacity: 0.0,
            phrase_index: 0,
        };

        if self.phrases.is_empty() || elapsed_ms < self.start_ms {
            return blank;
        }

        let local = elapsed_ms - self.start_ms;
        let cycle = (local / self.cycle_ms()).floor();
        let phrase_index = (cycle as usize) % self.phrases.len();
        let phrase = self.phrases[phrase_index];
        let within = local - cycle * self.cycle_ms();

        if within < self.type_ms {
            let progress = within / self.type_ms;
            let chars = (progress * phrase.chars().count() as f64).floor() as usize;
            return TypewriterFrame {
                text: prefix(phrase, chars),
                opacity: progress,
                phrase_index,
            };
        }

        let fading = within - self.type_ms - self.hold_ms;
        let opacity = if fading <= 0.0 {
            1.0
        } else {
            (1.0 - fading / self.fade_ms).max(0.0)
        };

        TypewriterFrame {
            text: phrase,
            opacity,
            phrase_index,
        }
    }
}
