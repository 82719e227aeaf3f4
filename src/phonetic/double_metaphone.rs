//! The Double Metaphone rule table.
//!
//! One cursor scans an uppercased copy of the word; each consonant class is
//! an ordered conditional chain annotated with the literal context pattern
//! it matches. Rules append to a primary and a secondary code, which diverge
//! on soft consonants and on clusters whose pronunciation depends on the
//! word's apparent origin (Germanic, Slavic, Italian, French, Spanish).

use super::{MetaphoneCode, MAX_CODE_LEN};

/// Trailing padding so lookahead rules can compare against literal patterns
/// that extend past the end of the word (e.g. "IER " final, "MAC C" names).
const PAD: usize = 5;

/// Encode a word into its Double Metaphone code pair.
///
/// Case-insensitive; non-alphabetic characters are skipped rather than
/// rejected, so any input is valid. Empty or entirely non-alphabetic input
/// yields an empty code pair. Codes are capped at [`MAX_CODE_LEN`] symbols;
/// the scan stops as soon as both codes reach the cap.
pub fn phonetic_code(word: &str) -> MetaphoneCode {
    let mut encoder = Encoder::new(word);
    encoder.run();
    encoder.into_code()
}

struct Encoder {
    /// Uppercased characters followed by `PAD` spaces.
    word: Vec<char>,
    /// Character count of the actual word, excluding padding.
    length: usize,
    /// Index of the final character of the actual word.
    last: isize,
    slavo_germanic: bool,
    primary: String,
    secondary: String,
}

impl Encoder {
    fn new(input: &str) -> Self {
        let mut word: Vec<char> = input.trim().chars().flat_map(char::to_uppercase).collect();
        let length = word.len();
        word.extend(std::iter::repeat(' ').take(PAD));

        let upper: String = word[..length].iter().collect();
        let slavo_germanic = upper.contains('W')
            || upper.contains('K')
            || upper.contains("CZ")
            || upper.contains("WITZ");

        Self {
            word,
            length,
            last: length as isize - 1,
            slavo_germanic,
            primary: String::new(),
            secondary: String::new(),
        }
    }

    fn into_code(self) -> MetaphoneCode {
        let mut primary = self.primary;
        let mut secondary = self.secondary;
        primary.truncate(MAX_CODE_LEN);
        secondary.truncate(MAX_CODE_LEN);

        // Single consistent convention: the alternate is empty when the
        // secondary pronunciation is identical to the primary.
        let alternate = if secondary == primary {
            String::new()
        } else {
            secondary
        };
        MetaphoneCode { primary, alternate }
    }

    #[inline(always)]
    fn char_at(&self, pos: isize) -> char {
        if pos < 0 || pos as usize >= self.word.len() {
            '\0'
        } else {
            self.word[pos as usize]
        }
    }

    #[inline(always)]
    fn is_vowel(&self, pos: isize) -> bool {
        matches!(self.char_at(pos), 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    /// True when any of the literal `patterns` occurs at `start`.
    /// Patterns are ASCII; `len` is their common length.
    fn string_at(&self, start: isize, len: usize, patterns: &[&str]) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;
        if start + len > self.word.len() {
            return false;
        }
        let window = &self.word[start..start + len];
        patterns
            .iter()
            .any(|pat| pat.chars().eq(window.iter().copied()))
    }

    /// Append the same symbols to both codes.
    fn add(&mut self, code: &str) {
        self.primary.push_str(code);
        self.secondary.push_str(code);
    }

    /// Append diverging symbols; either side may be empty.
    fn add_pair(&mut self, primary: &str, secondary: &str) {
        self.primary.push_str(primary);
        self.secondary.push_str(secondary);
    }

    fn run(&mut self) {
        let mut current: isize = 0;

        // Silent first letter: 'gnome', 'knight', 'pneumonia', 'wrack',
        // 'psalm'.
        if self.string_at(0, 2, &["GN", "KN", "PN", "WR", "PS"]) {
            current += 1;
        }

        // Initial 'X' is pronounced 'Z', which maps to 'S': 'Xavier'.
        if self.char_at(0) == 'X' {
            self.add("S");
            current += 1;
        }

        while self.primary.len() < MAX_CODE_LEN || self.secondary.len() < MAX_CODE_LEN {
            if current >= self.length as isize {
                break;
            }
            current = self.encode_at(current);
        }
    }

    /// Apply the rule for the character at `current`, returning the next
    /// cursor position.
    fn encode_at(&mut self, current: isize) -> isize {
        match self.char_at(current) {
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                // Vowels are encoded only word-initially.
                if current == 0 {
                    self.add("A");
                }
                current + 1
            }

            'B' => {
                // '-mb' as in 'dumb' is handled under 'M'.
                self.add("P");
                if self.char_at(current + 1) == 'B' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'Ç' => {
                self.add("S");
                current + 1
            }

            'C' => self.encode_c(current),

            'D' => {
                if self.string_at(current, 2, &["DG"]) {
                    if self.string_at(current + 2, 1, &["I", "E", "Y"]) {
                        // e.g. 'edge'
                        self.add("J");
                        return current + 3;
                    }
                    // e.g. 'edgar'
                    self.add("TK");
                    return current + 2;
                }
                if self.string_at(current, 2, &["DT", "DD"]) {
                    self.add("T");
                    return current + 2;
                }
                self.add("T");
                current + 1
            }

            'F' => {
                self.add("F");
                if self.char_at(current + 1) == 'F' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'G' => self.encode_g(current),

            'H' => {
                // Keep only when initial or between two vowels; also
                // collapses 'HH'.
                if (current == 0 || self.is_vowel(current - 1)) && self.is_vowel(current + 1) {
                    self.add("H");
                    current + 2
                } else {
                    current + 1
                }
            }

            'J' => self.encode_j(current),

            'K' => {
                self.add("K");
                if self.char_at(current + 1) == 'K' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'L' => {
                if self.char_at(current + 1) == 'L' {
                    // Spanish double-L: 'cabrillo', 'gallegos'.
                    let spanish_ll = (current == self.length as isize - 3
                        && self.string_at(current - 1, 4, &["ILLO", "ILLA", "ALLE"]))
                        || ((self.string_at(self.last - 1, 2, &["AS", "OS"])
                            || self.string_at(self.last, 1, &["A", "O"]))
                            && self.string_at(current - 1, 4, &["ALLE"]));
                    if spanish_ll {
                        self.add_pair("L", "");
                        return current + 2;
                    }
                    self.add("L");
                    current + 2
                } else {
                    self.add("L");
                    current + 1
                }
            }

            'M' => {
                self.add("M");
                // 'dumb', 'thumb': silent B after, so swallow it here.
                if (self.string_at(current - 1, 3, &["UMB"])
                    && (current + 1 == self.last || self.string_at(current + 2, 2, &["ER"])))
                    || self.char_at(current + 1) == 'M'
                {
                    current + 2
                } else {
                    current + 1
                }
            }

            'N' => {
                self.add("N");
                if self.char_at(current + 1) == 'N' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'Ñ' => {
                self.add("N");
                current + 1
            }

            'P' => {
                if self.char_at(current + 1) == 'H' {
                    self.add("F");
                    return current + 2;
                }
                self.add("P");
                // 'campbell', 'raspberry'
                if self.string_at(current + 1, 1, &["P", "B"]) {
                    current + 2
                } else {
                    current + 1
                }
            }

            'Q' => {
                self.add("K");
                if self.char_at(current + 1) == 'Q' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'R' => {
                // French final '-ier': 'rogier', but not 'hochmeier'.
                if current == self.last
                    && !self.slavo_germanic
                    && self.string_at(current - 2, 2, &["IE"])
                    && !self.string_at(current - 4, 2, &["ME", "MA"])
                {
                    self.add_pair("", "R");
                } else {
                    self.add("R");
                }
                if self.char_at(current + 1) == 'R' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'S' => self.encode_s(current),

            'T' => {
                if self.string_at(current, 4, &["TION"]) {
                    self.add("X");
                    return current + 3;
                }
                if self.string_at(current, 3, &["TIA", "TCH"]) {
                    self.add("X");
                    return current + 3;
                }
                if self.string_at(current, 2, &["TH"]) || self.string_at(current, 3, &["TTH"]) {
                    // 'thomas', 'thames', or Germanic
                    if self.string_at(current + 2, 2, &["OM", "AM"])
                        || self.string_at(0, 4, &["VAN ", "VON "])
                        || self.string_at(0, 3, &["SCH"])
                    {
                        self.add("T");
                    } else {
                        self.add_pair("0", "T");
                    }
                    return current + 2;
                }
                self.add("T");
                if self.string_at(current + 1, 1, &["T", "D"]) {
                    current + 2
                } else {
                    current + 1
                }
            }

            'V' => {
                self.add("F");
                if self.char_at(current + 1) == 'V' {
                    current + 2
                } else {
                    current + 1
                }
            }

            'W' => self.encode_w(current),

            'X' => {
                // French final '-aux'/'-oux' is silent: 'breaux', 'roux'.
                let silent_final = current == self.last
                    && (self.string_at(current - 3, 3, &["IAU", "EAU"])
                        || self.string_at(current - 2, 2, &["AU", "OU"]));
                if !silent_final {
                    self.add("KS");
                }
                if self.string_at(current + 1, 1, &["C", "X"]) {
                    current + 2
                } else {
                    current + 1
                }
            }

            'Z' => {
                // Chinese pinyin: 'zhao'.
                if self.char_at(current + 1) == 'H' {
                    self.add("J");
                    return current + 2;
                }
                if self.string_at(current + 1, 2, &["ZO", "ZI", "ZA"])
                    || (self.slavo_germanic && current > 0 && self.char_at(current - 1) != 'T')
                {
                    self.add_pair("S", "TS");
                } else {
                    self.add("S");
                }
                if self.char_at(current + 1) == 'Z' {
                    current + 2
                } else {
                    current + 1
                }
            }

            // Non-alphabetic characters carry no sound.
            _ => current + 1,
        }
    }

    fn encode_c(&mut self, current: isize) -> isize {
        // Germanic '-ach-': 'macher', but not 'bacchus' handled below.
        if current > 1
            && !self.is_vowel(current - 2)
            && self.string_at(current - 1, 3, &["ACH"])
            && self.char_at(current + 2) != 'I'
            && (self.char_at(current + 2) != 'E'
                || self.string_at(current - 2, 6, &["BACHER", "MACHER"]))
        {
            self.add("K");
            return current + 2;
        }

        // Special case 'caesar'.
        if current == 0 && self.string_at(current, 6, &["CAESAR"]) {
            self.add("S");
            return current + 2;
        }

        // Italian 'chianti'.
        if self.string_at(current, 4, &["CHIA"]) {
            self.add("K");
            return current + 2;
        }

        if self.string_at(current, 2, &["CH"]) {
            // 'michael'
            if current > 0 && self.string_at(current, 4, &["CHAE"]) {
                self.add_pair("K", "X");
                return current + 2;
            }

            // Greek roots: 'chemistry', 'chorus', but not 'chore'.
            if current == 0
                && (self.string_at(current + 1, 5, &["HARAC", "HARIS"])
                    || self.string_at(current + 1, 3, &["HOR", "HYM", "HIA", "HEM"]))
                && !self.string_at(0, 5, &["CHORE"])
            {
                self.add("K");
                return current + 2;
            }

            // Germanic, Greek, or otherwise 'ch' as 'kh':
            // 'architect' but not 'arch'; 'wachtler', 'wechsler', but not
            // 'tichner'.
            let kh_sound = self.string_at(0, 4, &["VAN ", "VON "])
                || self.string_at(0, 3, &["SCH"])
                || self.string_at(current - 2, 6, &["ORCHES", "ARCHIT", "ORCHID"])
                || self.string_at(current + 2, 1, &["T", "S"])
                || ((self.string_at(current - 1, 1, &["A", "O", "U", "E"]) || current == 0)
                    && self.string_at(
                        current + 2,
                        1,
                        &["L", "R", "N", "M", "B", "H", "F", "V", "W", " "],
                    ));
            if kh_sound {
                self.add("K");
            } else if current > 0 {
                if self.string_at(0, 2, &["MC"]) {
                    // 'McHugh'
                    self.add("K");
                } else {
                    self.add_pair("X", "K");
                }
            } else {
                self.add("X");
            }
            return current + 2;
        }

        // 'czerny', unless part of '-wicz'.
        if self.string_at(current, 2, &["CZ"]) && !self.string_at(current - 2, 4, &["WICZ"]) {
            self.add_pair("S", "X");
            return current + 2;
        }

        // 'focaccia'
        if self.string_at(current + 1, 3, &["CIA"]) {
            self.add("X");
            return current + 3;
        }

        // Double 'C', but not 'McClellan'.
        if self.string_at(current, 2, &["CC"]) && !(current == 1 && self.char_at(0) == 'M') {
            // 'bellocchio' but not 'bacchus'.
            if self.string_at(current + 2, 1, &["I", "E", "H"])
                && !self.string_at(current + 2, 2, &["HU"])
            {
                // 'accident', 'accede', 'succeed'
                if (current == 1 && self.char_at(current - 1) == 'A')
                    || self.string_at(current - 1, 5, &["UCCEE", "UCCES"])
                {
                    self.add("KS");
                } else {
                    // 'bacci', 'bertucci', other Italian
                    self.add("X");
                }
                return current + 3;
            }
            // Pierce's rule.
            self.add("K");
            return current + 2;
        }

        if self.string_at(current, 2, &["CK", "CG", "CQ"]) {
            self.add("K");
            return current + 2;
        }

        if self.string_at(current, 2, &["CI", "CE", "CY"]) {
            // Italian vs. English.
            if self.string_at(current, 3, &["CIO", "CIE", "CIA"]) {
                self.add_pair("S", "X");
            } else {
                self.add("S");
            }
            return current + 2;
        }

        self.add("K");
        // Name sequences: 'mac caffrey', 'mac gregor'.
        if self.string_at(current + 1, 2, &[" C", " Q", " G"]) {
            current + 3
        } else if self.string_at(current + 1, 1, &["C", "K", "Q"])
            && !self.string_at(current + 1, 2, &["CE", "CI"])
        {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_g(&mut self, current: isize) -> isize {
        if self.char_at(current + 1) == 'H' {
            if current > 0 && !self.is_vowel(current - 1) {
                self.add("K");
                return current + 2;
            }
            // 'ghislane', 'ghiradelli'
            if current == 0 {
                if self.char_at(current + 2) == 'I' {
                    self.add("J");
                } else {
                    self.add("K");
                }
                return current + 2;
            }
            // Parker's rule, with refinements: 'hugh', 'bough', 'broughton'.
            if (current > 1 && self.string_at(current - 2, 1, &["B", "H", "D"]))
                || (current > 2 && self.string_at(current - 3, 1, &["B", "H", "D"]))
                || (current > 3 && self.string_at(current - 4, 1, &["B", "H"]))
            {
                return current + 2;
            }
            // 'laugh', 'McLaughlin', 'cough', 'gough', 'rough', 'tough'
            if current > 2
                && self.char_at(current - 1) == 'U'
                && self.string_at(current - 3, 1, &["C", "G", "L", "R", "T"])
            {
                self.add("F");
            } else if current > 0 && self.char_at(current - 1) != 'I' {
                self.add("K");
            }
            return current + 2;
        }

        if self.char_at(current + 1) == 'N' {
            if current == 1 && self.is_vowel(0) && !self.slavo_germanic {
                self.add_pair("KN", "N");
            } else if !self.string_at(current + 2, 2, &["EY"]) && !self.slavo_germanic {
                // Not 'cagney'.
                self.add_pair("N", "KN");
            } else {
                self.add("KN");
            }
            return current + 2;
        }

        // 'tagliaro'
        if self.string_at(current + 1, 2, &["LI"]) && !self.slavo_germanic {
            self.add_pair("KL", "L");
            return current + 2;
        }

        // Initial '-ges-', '-gep-', '-gel-', '-gie-', or 'gy-'.
        if current == 0
            && (self.char_at(current + 1) == 'Y'
                || self.string_at(
                    current + 1,
                    2,
                    &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
                ))
        {
            self.add_pair("K", "J");
            return current + 2;
        }

        // '-ger-', '-gy-'.
        if (self.string_at(current + 1, 2, &["ER"]) || self.char_at(current + 1) == 'Y')
            && !self.string_at(0, 6, &["DANGER", "RANGER", "MANGER"])
            && !self.string_at(current - 1, 1, &["E", "I"])
            && !self.string_at(current - 1, 3, &["RGY", "OGY"])
        {
            self.add_pair("K", "J");
            return current + 2;
        }

        // Italian 'biaggi'.
        if self.string_at(current + 1, 1, &["E", "I", "Y"])
            || self.string_at(current - 1, 4, &["AGGI", "OGGI"])
        {
            // Obviously Germanic.
            if self.string_at(0, 4, &["VAN ", "VON "])
                || self.string_at(0, 3, &["SCH"])
                || self.string_at(current + 1, 2, &["ET"])
            {
                self.add("K");
            } else if self.string_at(current + 1, 4, &["IER "]) {
                // Always soft with a French ending.
                self.add("J");
            } else {
                self.add_pair("J", "K");
            }
            return current + 2;
        }

        self.add("K");
        if self.char_at(current + 1) == 'G' {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_j(&mut self, current: isize) -> isize {
        // Obvious Spanish: 'jose', 'san jacinto'.
        if self.string_at(current, 4, &["JOSE"]) || self.string_at(0, 4, &["SAN "]) {
            if (current == 0 && self.char_at(current + 4) == ' ')
                || self.string_at(0, 4, &["SAN "])
            {
                self.add("H");
            } else {
                self.add_pair("J", "H");
            }
            return current + 1;
        }

        if current == 0 {
            // 'Yankelovich' should match 'Jankelowicz'.
            self.add_pair("J", "A");
        } else if self.is_vowel(current - 1)
            && !self.slavo_germanic
            && (self.char_at(current + 1) == 'A' || self.char_at(current + 1) == 'O')
        {
            // Spanish pronunciation: 'bajador'.
            self.add_pair("J", "H");
        } else if current == self.last {
            self.add_pair("J", "");
        } else if !self.string_at(current + 1, 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
            && !self.string_at(current - 1, 1, &["S", "K", "L"])
        {
            self.add("J");
        }

        if self.char_at(current + 1) == 'J' {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_s(&mut self, current: isize) -> isize {
        // Silent S: 'island', 'isle', 'carlisle', 'carlysle'.
        if self.string_at(current - 1, 3, &["ISL", "YSL"]) {
            return current + 1;
        }

        // 'sugar-'
        if current == 0 && self.string_at(current, 5, &["SUGAR"]) {
            self.add_pair("X", "S");
            return current + 1;
        }

        if self.string_at(current, 2, &["SH"]) {
            // Germanic surnames keep the S sound: '-sheim', '-sholz'.
            if self.string_at(current + 1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                self.add("S");
            } else {
                self.add("X");
            }
            return current + 2;
        }

        // Italian and Armenian: '-sio-', '-sia-'.
        if self.string_at(current, 3, &["SIO", "SIA"]) || self.string_at(current, 4, &["SIAN"]) {
            if self.slavo_germanic {
                self.add("S");
            } else {
                self.add_pair("S", "X");
            }
            return current + 3;
        }

        // German initial 'sm-/sn-/sl-/sw-' and '-sz-': 'smith' matches
        // 'schmidt', 'snider' matches 'schneider'.
        if (current == 0 && self.string_at(current + 1, 1, &["M", "N", "L", "W"]))
            || self.string_at(current + 1, 1, &["Z"])
        {
            self.add_pair("S", "X");
            return if self.string_at(current + 1, 1, &["Z"]) {
                current + 2
            } else {
                current + 1
            };
        }

        if self.string_at(current, 2, &["SC"]) {
            // Schlesinger's rule.
            if self.char_at(current + 2) == 'H' {
                // Dutch origin: 'school', 'schooner'.
                if self.string_at(current + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                    // 'schermerhorn', 'schenker'
                    if self.string_at(current + 3, 2, &["ER", "EN"]) {
                        self.add_pair("X", "SK");
                    } else {
                        self.add("SK");
                    }
                } else if current == 0 && !self.is_vowel(3) && self.char_at(3) != 'W' {
                    self.add_pair("X", "S");
                } else {
                    self.add("X");
                }
                return current + 3;
            }
            if self.string_at(current + 2, 1, &["I", "E", "Y"]) {
                self.add("S");
                return current + 3;
            }
            self.add("SK");
            return current + 3;
        }

        // French final S is silent: 'resnais', 'artois'.
        if current == self.last && self.string_at(current - 2, 2, &["AI", "OI"]) {
            self.add_pair("", "S");
        } else {
            self.add("S");
        }
        if self.string_at(current + 1, 1, &["S", "Z"]) {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_w(&mut self, current: isize) -> isize {
        // 'WR' anywhere sounds as R: 'wrack', 'awry'.
        if self.string_at(current, 2, &["WR"]) {
            self.add("R");
            return current + 2;
        }

        if current == 0 && (self.is_vowel(current + 1) || self.string_at(current, 2, &["WH"])) {
            if self.is_vowel(current + 1) {
                // 'Wasserman' should match 'Vasserman'.
                self.add_pair("A", "F");
            } else {
                // 'Uomo' should match 'Womo'.
                self.add("A");
            }
        }

        // 'Arnow' should match 'Arnoff'; Polish '-owski'.
        if (current == self.last && self.is_vowel(current - 1))
            || self.string_at(current - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || self.string_at(0, 3, &["SCH"])
        {
            self.add_pair("", "F");
            return current + 1;
        }

        // Polish: 'filipowicz'.
        if self.string_at(current, 4, &["WICZ", "WITZ"]) {
            self.add_pair("TS", "FX");
            return current + 4;
        }

        current + 1
    }
}
