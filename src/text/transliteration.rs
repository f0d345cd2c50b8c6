//! Static transliteration table for non-ASCII letters.
//!
//! Maps individual code points to short ASCII replacements. The mapping is
//! visual rather than linguistic: thorn (þ) becomes `p`, mu (µ) becomes `u`,
//! and enclosed alphanumerics keep their enclosure as literal parentheses
//! (`ⓐ` becomes `(a)`).
//!
//! Every key survives canonical decomposition unchanged, so lookups may be
//! performed on NFD text. Every value is one to three characters drawn from
//! `[A-Za-z0-9_]`, or a single such character wrapped in parentheses.
//!
//! ## Example
//!
//! ```rust
//! use bitfn::text::transliteration;
//!
//! assert_eq!(transliteration::lookup('æ'), Some("ae"));
//! assert_eq!(transliteration::lookup('ẞ'), Some("SS"));
//! assert_eq!(transliteration::lookup('ⓐ'), Some("(a)"));
//! assert_eq!(transliteration::lookup('a'), None);
//! ```

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// Table entries, one code point per line.
static ENTRIES: &[(char, &str)] = &[
    // Ligatures and Germanic/Nordic letters
    ('\u{00B5}', "u"), // µ micro sign
    ('\u{00D0}', "D"), // Ð latin capital letter eth
    ('\u{00F0}', "d"), // ð latin small letter eth
    ('\u{00D8}', "O"), // Ø latin capital letter o with stroke
    ('\u{00F8}', "o"), // ø latin small letter o with stroke
    ('\u{00DE}', "P"), // Þ latin capital letter thorn
    ('\u{00FE}', "p"), // þ latin small letter thorn
    ('\u{00E6}', "ae"), // æ latin small letter ae
    ('\u{00C6}', "AE"), // Æ latin capital letter ae
    ('\u{0153}', "oe"), // œ latin small ligature oe
    ('\u{0152}', "OE"), // Œ latin capital ligature oe
    ('\u{1E9E}', "SS"), // ẞ latin capital letter sharp s
    ('\u{00DF}', "ss"), // ß latin small letter sharp s
    ('\u{0132}', "IJ"), // Ĳ latin capital ligature ij
    ('\u{0133}', "ij"), // ĳ latin small ligature ij
    ('\u{01C4}', "DZ"), // Ǆ latin capital letter dz with caron
    ('\u{01C5}', "Dz"), // ǅ latin capital letter d with small letter z with caron
    ('\u{01C6}', "dz"), // ǆ latin small letter dz with caron
    ('\u{01C7}', "LJ"), // Ǉ latin capital letter lj
    ('\u{01C8}', "Lj"), // ǈ latin capital letter l with small letter j
    ('\u{01C9}', "lj"), // ǉ latin small letter lj
    ('\u{01CA}', "NJ"), // Ǌ latin capital letter nj
    ('\u{01CB}', "Nj"), // ǋ latin capital letter n with small letter j
    ('\u{01CC}', "nj"), // ǌ latin small letter nj
    ('\u{01F1}', "DZ"), // Ǳ latin capital letter dz
    ('\u{01F2}', "Dz"), // ǲ latin capital letter d with small letter z
    ('\u{01F3}', "dz"), // ǳ latin small letter dz
    ('\u{0238}', "db"), // ȸ latin small letter db digraph
    ('\u{0239}', "qp"), // ȹ latin small letter qp digraph
    ('\u{0195}', "hv"), // ƕ latin small letter hv
    ('\u{01F6}', "HV"), // Ƕ latin capital letter hwair
    ('\u{01A2}', "OI"), // Ƣ latin capital letter oi
    ('\u{01A3}', "oi"), // ƣ latin small letter oi
    ('\u{02A3}', "dz"), // ʣ latin small letter dz digraph
    ('\u{1D6B}', "ue"), // ᵫ latin small letter ue
    ('\u{FB00}', "ff"), // ﬀ latin small ligature ff
    ('\u{FB01}', "fi"), // ﬁ latin small ligature fi
    ('\u{FB02}', "fl"), // ﬂ latin small ligature fl
    ('\u{FB03}', "ffi"), // ﬃ latin small ligature ffi
    ('\u{FB04}', "ffl"), // ﬄ latin small ligature ffl
    ('\u{FB06}', "st"), // ﬆ latin small ligature st

    // Stroked, hooked and barred letters
    ('\u{0110}', "D"), // Đ latin capital letter d with stroke
    ('\u{0111}', "d"), // đ latin small letter d with stroke
    ('\u{0126}', "H"), // Ħ latin capital letter h with stroke
    ('\u{0127}', "h"), // ħ latin small letter h with stroke
    ('\u{0131}', "i"), // ı latin small letter dotless i
    ('\u{0138}', "k"), // ĸ latin small letter kra
    ('\u{013F}', "L"), // Ŀ latin capital letter l with middle dot
    ('\u{0140}', "l"), // ŀ latin small letter l with middle dot
    ('\u{0141}', "L"), // Ł latin capital letter l with stroke
    ('\u{0142}', "l"), // ł latin small letter l with stroke
    ('\u{0149}', "n"), // ŉ latin small letter n preceded by apostrophe
    ('\u{014A}', "N"), // Ŋ latin capital letter eng
    ('\u{014B}', "n"), // ŋ latin small letter eng
    ('\u{0166}', "T"), // Ŧ latin capital letter t with stroke
    ('\u{0167}', "t"), // ŧ latin small letter t with stroke
    ('\u{017F}', "s"), // ſ latin small letter long s
    ('\u{0180}', "b"), // ƀ latin small letter b with stroke
    ('\u{0181}', "B"), // Ɓ latin capital letter b with hook
    ('\u{0182}', "B"), // Ƃ latin capital letter b with topbar
    ('\u{0183}', "b"), // ƃ latin small letter b with topbar
    ('\u{0187}', "C"), // Ƈ latin capital letter c with hook
    ('\u{0188}', "c"), // ƈ latin small letter c with hook
    ('\u{0189}', "D"), // Ɖ latin capital letter african d
    ('\u{018A}', "D"), // Ɗ latin capital letter d with hook
    ('\u{018B}', "D"), // Ƌ latin capital letter d with topbar
    ('\u{018C}', "d"), // ƌ latin small letter d with topbar
    ('\u{0191}', "F"), // Ƒ latin capital letter f with hook
    ('\u{0192}', "f"), // ƒ latin small letter f with hook
    ('\u{0193}', "G"), // Ɠ latin capital letter g with hook
    ('\u{0197}', "I"), // Ɨ latin capital letter i with stroke
    ('\u{0198}', "K"), // Ƙ latin capital letter k with hook
    ('\u{0199}', "k"), // ƙ latin small letter k with hook
    ('\u{019A}', "l"), // ƚ latin small letter l with bar
    ('\u{019D}', "N"), // Ɲ latin capital letter n with left hook
    ('\u{019E}', "n"), // ƞ latin small letter n with long right leg
    ('\u{019F}', "O"), // Ɵ latin capital letter o with middle tilde
    ('\u{01A4}', "P"), // Ƥ latin capital letter p with hook
    ('\u{01A5}', "p"), // ƥ latin small letter p with hook
    ('\u{01AB}', "t"), // ƫ latin small letter t with palatal hook
    ('\u{01AC}', "T"), // Ƭ latin capital letter t with hook
    ('\u{01AD}', "t"), // ƭ latin small letter t with hook
    ('\u{01AE}', "T"), // Ʈ latin capital letter t with retroflex hook
    ('\u{01B2}', "V"), // Ʋ latin capital letter v with hook
    ('\u{01B3}', "Y"), // Ƴ latin capital letter y with hook
    ('\u{01B4}', "y"), // ƴ latin small letter y with hook
    ('\u{01B5}', "Z"), // Ƶ latin capital letter z with stroke
    ('\u{01B6}', "z"), // ƶ latin small letter z with stroke
    ('\u{01E4}', "G"), // Ǥ latin capital letter g with stroke
    ('\u{01E5}', "g"), // ǥ latin small letter g with stroke
    ('\u{0221}', "d"), // ȡ latin small letter d with curl
    ('\u{0224}', "Z"), // Ȥ latin capital letter z with hook
    ('\u{0225}', "z"), // ȥ latin small letter z with hook
    ('\u{0234}', "l"), // ȴ latin small letter l with curl
    ('\u{0235}', "n"), // ȵ latin small letter n with curl
    ('\u{0236}', "t"), // ȶ latin small letter t with curl
    ('\u{0237}', "j"), // ȷ latin small letter dotless j
    ('\u{023A}', "A"), // Ⱥ latin capital letter a with stroke
    ('\u{023B}', "C"), // Ȼ latin capital letter c with stroke
    ('\u{023C}', "c"), // ȼ latin small letter c with stroke
    ('\u{023D}', "L"), // Ƚ latin capital letter l with bar
    ('\u{023E}', "T"), // Ⱦ latin capital letter t with diagonal stroke
    ('\u{023F}', "s"), // ȿ latin small letter s with swash tail
    ('\u{0240}', "z"), // ɀ latin small letter z with swash tail
    ('\u{0243}', "B"), // Ƀ latin capital letter b with stroke
    ('\u{0244}', "U"), // Ʉ latin capital letter u bar
    ('\u{0246}', "E"), // Ɇ latin capital letter e with stroke
    ('\u{0247}', "e"), // ɇ latin small letter e with stroke
    ('\u{0248}', "J"), // Ɉ latin capital letter j with stroke
    ('\u{0249}', "j"), // ɉ latin small letter j with stroke
    ('\u{024A}', "Q"), // Ɋ latin capital letter small q with hook tail
    ('\u{024B}', "q"), // ɋ latin small letter q with hook tail
    ('\u{024C}', "R"), // Ɍ latin capital letter r with stroke
    ('\u{024D}', "r"), // ɍ latin small letter r with stroke
    ('\u{024E}', "Y"), // Ɏ latin capital letter y with stroke
    ('\u{024F}', "y"), // ɏ latin small letter y with stroke
    ('\u{0253}', "b"), // ɓ latin small letter b with hook
    ('\u{0255}', "c"), // ɕ latin small letter c with curl
    ('\u{0256}', "d"), // ɖ latin small letter d with tail
    ('\u{0257}', "d"), // ɗ latin small letter d with hook
    ('\u{0260}', "g"), // ɠ latin small letter g with hook
    ('\u{0266}', "h"), // ɦ latin small letter h with hook
    ('\u{0268}', "i"), // ɨ latin small letter i with stroke
    ('\u{026B}', "l"), // ɫ latin small letter l with middle tilde
    ('\u{026C}', "l"), // ɬ latin small letter l with belt
    ('\u{026D}', "l"), // ɭ latin small letter l with retroflex hook
    ('\u{0271}', "m"), // ɱ latin small letter m with hook
    ('\u{0272}', "n"), // ɲ latin small letter n with left hook
    ('\u{0273}', "n"), // ɳ latin small letter n with retroflex hook
    ('\u{027C}', "r"), // ɼ latin small letter r with long leg
    ('\u{027D}', "r"), // ɽ latin small letter r with tail
    ('\u{027E}', "r"), // ɾ latin small letter r with fishhook
    ('\u{0282}', "s"), // ʂ latin small letter s with hook
    ('\u{0288}', "t"), // ʈ latin small letter t with retroflex hook
    ('\u{0289}', "u"), // ʉ latin small letter u bar
    ('\u{028B}', "v"), // ʋ latin small letter v with hook
    ('\u{0290}', "z"), // ʐ latin small letter z with retroflex hook
    ('\u{0291}', "z"), // ʑ latin small letter z with curl
    ('\u{029D}', "j"), // ʝ latin small letter j with crossed-tail
    ('\u{02A0}', "q"), // ʠ latin small letter q with hook
    ('\u{1E9C}', "s"), // ẜ latin small letter long s with diagonal stroke
    ('\u{1E9D}', "s"), // ẝ latin small letter long s with high stroke
    ('\u{2C60}', "L"), // Ⱡ latin capital letter l with double bar
    ('\u{2C61}', "l"), // ⱡ latin small letter l with double bar
    ('\u{2C62}', "L"), // Ɫ latin capital letter l with middle tilde
    ('\u{2C63}', "P"), // Ᵽ latin capital letter p with stroke
    ('\u{2C64}', "R"), // Ɽ latin capital letter r with tail
    ('\u{2C65}', "a"), // ⱥ latin small letter a with stroke
    ('\u{2C66}', "t"), // ⱦ latin small letter t with diagonal stroke
    ('\u{2C67}', "H"), // Ⱨ latin capital letter h with descender
    ('\u{2C68}', "h"), // ⱨ latin small letter h with descender
    ('\u{2C69}', "K"), // Ⱪ latin capital letter k with descender
    ('\u{2C6A}', "k"), // ⱪ latin small letter k with descender
    ('\u{2C6B}', "Z"), // Ⱬ latin capital letter z with descender
    ('\u{2C6C}', "z"), // ⱬ latin small letter z with descender
    ('\u{2C71}', "v"), // ⱱ latin small letter v with right hook
    ('\u{2C72}', "W"), // Ⱳ latin capital letter w with hook
    ('\u{2C73}', "w"), // ⱳ latin small letter w with hook
    ('\u{2C74}', "v"), // ⱴ latin small letter v with curl
    ('\u{2C7E}', "S"), // Ȿ latin capital letter s with swash tail
    ('\u{2C7F}', "Z"), // Ɀ latin capital letter z with swash tail

    // Superscript and modifier letters and digits
    ('\u{00AA}', "a"), // ª feminine ordinal indicator
    ('\u{00BA}', "o"), // º masculine ordinal indicator
    ('\u{00B9}', "1"), // ¹ superscript one
    ('\u{00B2}', "2"), // ² superscript two
    ('\u{00B3}', "3"), // ³ superscript three
    ('\u{2070}', "0"), // ⁰ superscript zero
    ('\u{2071}', "i"), // ⁱ superscript latin small letter i
    ('\u{2074}', "4"), // ⁴ superscript four
    ('\u{2075}', "5"), // ⁵ superscript five
    ('\u{2076}', "6"), // ⁶ superscript six
    ('\u{2077}', "7"), // ⁷ superscript seven
    ('\u{2078}', "8"), // ⁸ superscript eight
    ('\u{2079}', "9"), // ⁹ superscript nine
    ('\u{207F}', "n"), // ⁿ superscript latin small letter n
    ('\u{02B0}', "h"), // ʰ modifier letter small h
    ('\u{02B2}', "j"), // ʲ modifier letter small j
    ('\u{02B3}', "r"), // ʳ modifier letter small r
    ('\u{02B7}', "w"), // ʷ modifier letter small w
    ('\u{02B8}', "y"), // ʸ modifier letter small y
    ('\u{02E1}', "l"), // ˡ modifier letter small l
    ('\u{02E2}', "s"), // ˢ modifier letter small s
    ('\u{02E3}', "x"), // ˣ modifier letter small x
    ('\u{1D2C}', "A"), // ᴬ modifier letter capital a
    ('\u{1D2E}', "B"), // ᴮ modifier letter capital b
    ('\u{1D30}', "D"), // ᴰ modifier letter capital d
    ('\u{1D31}', "E"), // ᴱ modifier letter capital e
    ('\u{1D33}', "G"), // ᴳ modifier letter capital g
    ('\u{1D34}', "H"), // ᴴ modifier letter capital h
    ('\u{1D35}', "I"), // ᴵ modifier letter capital i
    ('\u{1D36}', "J"), // ᴶ modifier letter capital j
    ('\u{1D37}', "K"), // ᴷ modifier letter capital k
    ('\u{1D38}', "L"), // ᴸ modifier letter capital l
    ('\u{1D39}', "M"), // ᴹ modifier letter capital m
    ('\u{1D3A}', "N"), // ᴺ modifier letter capital n
    ('\u{1D3C}', "O"), // ᴼ modifier letter capital o
    ('\u{1D3E}', "P"), // ᴾ modifier letter capital p
    ('\u{1D3F}', "R"), // ᴿ modifier letter capital r
    ('\u{1D40}', "T"), // ᵀ modifier letter capital t
    ('\u{1D41}', "U"), // ᵁ modifier letter capital u
    ('\u{1D42}', "W"), // ᵂ modifier letter capital w
    ('\u{1D43}', "a"), // ᵃ modifier letter small a
    ('\u{1D47}', "b"), // ᵇ modifier letter small b
    ('\u{1D48}', "d"), // ᵈ modifier letter small d
    ('\u{1D49}', "e"), // ᵉ modifier letter small e
    ('\u{1D4D}', "g"), // ᵍ modifier letter small g
    ('\u{1D4F}', "k"), // ᵏ modifier letter small k
    ('\u{1D50}', "m"), // ᵐ modifier letter small m
    ('\u{1D52}', "o"), // ᵒ modifier letter small o
    ('\u{1D56}', "p"), // ᵖ modifier letter small p
    ('\u{1D57}', "t"), // ᵗ modifier letter small t
    ('\u{1D58}', "u"), // ᵘ modifier letter small u
    ('\u{1D5B}', "v"), // ᵛ modifier letter small v
    ('\u{1D9C}', "c"), // ᶜ modifier letter small c
    ('\u{1DA0}', "f"), // ᶠ modifier letter small f
    ('\u{1DBB}', "z"), // ᶻ modifier letter small z

    // Subscript letters and digits
    ('\u{2080}', "0"), // ₀ subscript zero
    ('\u{2081}', "1"), // ₁ subscript one
    ('\u{2082}', "2"), // ₂ subscript two
    ('\u{2083}', "3"), // ₃ subscript three
    ('\u{2084}', "4"), // ₄ subscript four
    ('\u{2085}', "5"), // ₅ subscript five
    ('\u{2086}', "6"), // ₆ subscript six
    ('\u{2087}', "7"), // ₇ subscript seven
    ('\u{2088}', "8"), // ₈ subscript eight
    ('\u{2089}', "9"), // ₉ subscript nine
    ('\u{2090}', "a"), // ₐ latin subscript small letter a
    ('\u{2091}', "e"), // ₑ latin subscript small letter e
    ('\u{2092}', "o"), // ₒ latin subscript small letter o
    ('\u{2093}', "x"), // ₓ latin subscript small letter x
    ('\u{2095}', "h"), // ₕ latin subscript small letter h
    ('\u{2096}', "k"), // ₖ latin subscript small letter k
    ('\u{2097}', "l"), // ₗ latin subscript small letter l
    ('\u{2098}', "m"), // ₘ latin subscript small letter m
    ('\u{2099}', "n"), // ₙ latin subscript small letter n
    ('\u{209A}', "p"), // ₚ latin subscript small letter p
    ('\u{209B}', "s"), // ₛ latin subscript small letter s
    ('\u{209C}', "t"), // ₜ latin subscript small letter t
    ('\u{1D62}', "i"), // ᵢ latin subscript small letter i
    ('\u{1D63}', "r"), // ᵣ latin subscript small letter r
    ('\u{1D64}', "u"), // ᵤ latin subscript small letter u
    ('\u{1D65}', "v"), // ᵥ latin subscript small letter v
    ('\u{2C7C}', "j"), // ⱼ latin subscript small letter j

    // Fullwidth forms
    ('\u{FF10}', "0"), // ０ fullwidth digit zero
    ('\u{FF11}', "1"), // １ fullwidth digit one
    ('\u{FF12}', "2"), // ２ fullwidth digit two
    ('\u{FF13}', "3"), // ３ fullwidth digit three
    ('\u{FF14}', "4"), // ４ fullwidth digit four
    ('\u{FF15}', "5"), // ５ fullwidth digit five
    ('\u{FF16}', "6"), // ６ fullwidth digit six
    ('\u{FF17}', "7"), // ７ fullwidth digit seven
    ('\u{FF18}', "8"), // ８ fullwidth digit eight
    ('\u{FF19}', "9"), // ９ fullwidth digit nine
    ('\u{FF21}', "A"), // Ａ fullwidth latin capital letter a
    ('\u{FF22}', "B"), // Ｂ fullwidth latin capital letter b
    ('\u{FF23}', "C"), // Ｃ fullwidth latin capital letter c
    ('\u{FF24}', "D"), // Ｄ fullwidth latin capital letter d
    ('\u{FF25}', "E"), // Ｅ fullwidth latin capital letter e
    ('\u{FF26}', "F"), // Ｆ fullwidth latin capital letter f
    ('\u{FF27}', "G"), // Ｇ fullwidth latin capital letter g
    ('\u{FF28}', "H"), // Ｈ fullwidth latin capital letter h
    ('\u{FF29}', "I"), // Ｉ fullwidth latin capital letter i
    ('\u{FF2A}', "J"), // Ｊ fullwidth latin capital letter j
    ('\u{FF2B}', "K"), // Ｋ fullwidth latin capital letter k
    ('\u{FF2C}', "L"), // Ｌ fullwidth latin capital letter l
    ('\u{FF2D}', "M"), // Ｍ fullwidth latin capital letter m
    ('\u{FF2E}', "N"), // Ｎ fullwidth latin capital letter n
    ('\u{FF2F}', "O"), // Ｏ fullwidth latin capital letter o
    ('\u{FF30}', "P"), // Ｐ fullwidth latin capital letter p
    ('\u{FF31}', "Q"), // Ｑ fullwidth latin capital letter q
    ('\u{FF32}', "R"), // Ｒ fullwidth latin capital letter r
    ('\u{FF33}', "S"), // Ｓ fullwidth latin capital letter s
    ('\u{FF34}', "T"), // Ｔ fullwidth latin capital letter t
    ('\u{FF35}', "U"), // Ｕ fullwidth latin capital letter u
    ('\u{FF36}', "V"), // Ｖ fullwidth latin capital letter v
    ('\u{FF37}', "W"), // Ｗ fullwidth latin capital letter w
    ('\u{FF38}', "X"), // Ｘ fullwidth latin capital letter x
    ('\u{FF39}', "Y"), // Ｙ fullwidth latin capital letter y
    ('\u{FF3A}', "Z"), // Ｚ fullwidth latin capital letter z
    ('\u{FF41}', "a"), // ａ fullwidth latin small letter a
    ('\u{FF42}', "b"), // ｂ fullwidth latin small letter b
    ('\u{FF43}', "c"), // ｃ fullwidth latin small letter c
    ('\u{FF44}', "d"), // ｄ fullwidth latin small letter d
    ('\u{FF45}', "e"), // ｅ fullwidth latin small letter e
    ('\u{FF46}', "f"), // ｆ fullwidth latin small letter f
    ('\u{FF47}', "g"), // ｇ fullwidth latin small letter g
    ('\u{FF48}', "h"), // ｈ fullwidth latin small letter h
    ('\u{FF49}', "i"), // ｉ fullwidth latin small letter i
    ('\u{FF4A}', "j"), // ｊ fullwidth latin small letter j
    ('\u{FF4B}', "k"), // ｋ fullwidth latin small letter k
    ('\u{FF4C}', "l"), // ｌ fullwidth latin small letter l
    ('\u{FF4D}', "m"), // ｍ fullwidth latin small letter m
    ('\u{FF4E}', "n"), // ｎ fullwidth latin small letter n
    ('\u{FF4F}', "o"), // ｏ fullwidth latin small letter o
    ('\u{FF50}', "p"), // ｐ fullwidth latin small letter p
    ('\u{FF51}', "q"), // ｑ fullwidth latin small letter q
    ('\u{FF52}', "r"), // ｒ fullwidth latin small letter r
    ('\u{FF53}', "s"), // ｓ fullwidth latin small letter s
    ('\u{FF54}', "t"), // ｔ fullwidth latin small letter t
    ('\u{FF55}', "u"), // ｕ fullwidth latin small letter u
    ('\u{FF56}', "v"), // ｖ fullwidth latin small letter v
    ('\u{FF57}', "w"), // ｗ fullwidth latin small letter w
    ('\u{FF58}', "x"), // ｘ fullwidth latin small letter x
    ('\u{FF59}', "y"), // ｙ fullwidth latin small letter y
    ('\u{FF5A}', "z"), // ｚ fullwidth latin small letter z
    ('\u{FF3F}', "_"), // ＿ fullwidth low line

    // Circled and parenthesized alphanumerics
    ('\u{2460}', "(1)"), // ① circled digit one
    ('\u{2461}', "(2)"), // ② circled digit two
    ('\u{2462}', "(3)"), // ③ circled digit three
    ('\u{2463}', "(4)"), // ④ circled digit four
    ('\u{2464}', "(5)"), // ⑤ circled digit five
    ('\u{2465}', "(6)"), // ⑥ circled digit six
    ('\u{2466}', "(7)"), // ⑦ circled digit seven
    ('\u{2467}', "(8)"), // ⑧ circled digit eight
    ('\u{2468}', "(9)"), // ⑨ circled digit nine
    ('\u{24EA}', "(0)"), // ⓪ circled digit zero
    ('\u{2474}', "(1)"), // ⑴ parenthesized digit one
    ('\u{2475}', "(2)"), // ⑵ parenthesized digit two
    ('\u{2476}', "(3)"), // ⑶ parenthesized digit three
    ('\u{2477}', "(4)"), // ⑷ parenthesized digit four
    ('\u{2478}', "(5)"), // ⑸ parenthesized digit five
    ('\u{2479}', "(6)"), // ⑹ parenthesized digit six
    ('\u{247A}', "(7)"), // ⑺ parenthesized digit seven
    ('\u{247B}', "(8)"), // ⑻ parenthesized digit eight
    ('\u{247C}', "(9)"), // ⑼ parenthesized digit nine
    ('\u{249C}', "(a)"), // ⒜ parenthesized latin small letter a
    ('\u{249D}', "(b)"), // ⒝ parenthesized latin small letter b
    ('\u{249E}', "(c)"), // ⒞ parenthesized latin small letter c
    ('\u{249F}', "(d)"), // ⒟ parenthesized latin small letter d
    ('\u{24A0}', "(e)"), // ⒠ parenthesized latin small letter e
    ('\u{24A1}', "(f)"), // ⒡ parenthesized latin small letter f
    ('\u{24A2}', "(g)"), // ⒢ parenthesized latin small letter g
    ('\u{24A3}', "(h)"), // ⒣ parenthesized latin small letter h
    ('\u{24A4}', "(i)"), // ⒤ parenthesized latin small letter i
    ('\u{24A5}', "(j)"), // ⒥ parenthesized latin small letter j
    ('\u{24A6}', "(k)"), // ⒦ parenthesized latin small letter k
    ('\u{24A7}', "(l)"), // ⒧ parenthesized latin small letter l
    ('\u{24A8}', "(m)"), // ⒨ parenthesized latin small letter m
    ('\u{24A9}', "(n)"), // ⒩ parenthesized latin small letter n
    ('\u{24AA}', "(o)"), // ⒪ parenthesized latin small letter o
    ('\u{24AB}', "(p)"), // ⒫ parenthesized latin small letter p
    ('\u{24AC}', "(q)"), // ⒬ parenthesized latin small letter q
    ('\u{24AD}', "(r)"), // ⒭ parenthesized latin small letter r
    ('\u{24AE}', "(s)"), // ⒮ parenthesized latin small letter s
    ('\u{24AF}', "(t)"), // ⒯ parenthesized latin small letter t
    ('\u{24B0}', "(u)"), // ⒰ parenthesized latin small letter u
    ('\u{24B1}', "(v)"), // ⒱ parenthesized latin small letter v
    ('\u{24B2}', "(w)"), // ⒲ parenthesized latin small letter w
    ('\u{24B3}', "(x)"), // ⒳ parenthesized latin small letter x
    ('\u{24B4}', "(y)"), // ⒴ parenthesized latin small letter y
    ('\u{24B5}', "(z)"), // ⒵ parenthesized latin small letter z
    ('\u{24B6}', "(A)"), // Ⓐ circled latin capital letter a
    ('\u{24B7}', "(B)"), // Ⓑ circled latin capital letter b
    ('\u{24B8}', "(C)"), // Ⓒ circled latin capital letter c
    ('\u{24B9}', "(D)"), // Ⓓ circled latin capital letter d
    ('\u{24BA}', "(E)"), // Ⓔ circled latin capital letter e
    ('\u{24BB}', "(F)"), // Ⓕ circled latin capital letter f
    ('\u{24BC}', "(G)"), // Ⓖ circled latin capital letter g
    ('\u{24BD}', "(H)"), // Ⓗ circled latin capital letter h
    ('\u{24BE}', "(I)"), // Ⓘ circled latin capital letter i
    ('\u{24BF}', "(J)"), // Ⓙ circled latin capital letter j
    ('\u{24C0}', "(K)"), // Ⓚ circled latin capital letter k
    ('\u{24C1}', "(L)"), // Ⓛ circled latin capital letter l
    ('\u{24C2}', "(M)"), // Ⓜ circled latin capital letter m
    ('\u{24C3}', "(N)"), // Ⓝ circled latin capital letter n
    ('\u{24C4}', "(O)"), // Ⓞ circled latin capital letter o
    ('\u{24C5}', "(P)"), // Ⓟ circled latin capital letter p
    ('\u{24C6}', "(Q)"), // Ⓠ circled latin capital letter q
    ('\u{24C7}', "(R)"), // Ⓡ circled latin capital letter r
    ('\u{24C8}', "(S)"), // Ⓢ circled latin capital letter s
    ('\u{24C9}', "(T)"), // Ⓣ circled latin capital letter t
    ('\u{24CA}', "(U)"), // Ⓤ circled latin capital letter u
    ('\u{24CB}', "(V)"), // Ⓥ circled latin capital letter v
    ('\u{24CC}', "(W)"), // Ⓦ circled latin capital letter w
    ('\u{24CD}', "(X)"), // Ⓧ circled latin capital letter x
    ('\u{24CE}', "(Y)"), // Ⓨ circled latin capital letter y
    ('\u{24CF}', "(Z)"), // Ⓩ circled latin capital letter z
    ('\u{24D0}', "(a)"), // ⓐ circled latin small letter a
    ('\u{24D1}', "(b)"), // ⓑ circled latin small letter b
    ('\u{24D2}', "(c)"), // ⓒ circled latin small letter c
    ('\u{24D3}', "(d)"), // ⓓ circled latin small letter d
    ('\u{24D4}', "(e)"), // ⓔ circled latin small letter e
    ('\u{24D5}', "(f)"), // ⓕ circled latin small letter f
    ('\u{24D6}', "(g)"), // ⓖ circled latin small letter g
    ('\u{24D7}', "(h)"), // ⓗ circled latin small letter h
    ('\u{24D8}', "(i)"), // ⓘ circled latin small letter i
    ('\u{24D9}', "(j)"), // ⓙ circled latin small letter j
    ('\u{24DA}', "(k)"), // ⓚ circled latin small letter k
    ('\u{24DB}', "(l)"), // ⓛ circled latin small letter l
    ('\u{24DC}', "(m)"), // ⓜ circled latin small letter m
    ('\u{24DD}', "(n)"), // ⓝ circled latin small letter n
    ('\u{24DE}', "(o)"), // ⓞ circled latin small letter o
    ('\u{24DF}', "(p)"), // ⓟ circled latin small letter p
    ('\u{24E0}', "(q)"), // ⓠ circled latin small letter q
    ('\u{24E1}', "(r)"), // ⓡ circled latin small letter r
    ('\u{24E2}', "(s)"), // ⓢ circled latin small letter s
    ('\u{24E3}', "(t)"), // ⓣ circled latin small letter t
    ('\u{24E4}', "(u)"), // ⓤ circled latin small letter u
    ('\u{24E5}', "(v)"), // ⓥ circled latin small letter v
    ('\u{24E6}', "(w)"), // ⓦ circled latin small letter w
    ('\u{24E7}', "(x)"), // ⓧ circled latin small letter x
    ('\u{24E8}', "(y)"), // ⓨ circled latin small letter y
    ('\u{24E9}', "(z)"), // ⓩ circled latin small letter z
];

static TABLE: OnceLock<FxHashMap<char, &'static str>> = OnceLock::new();

fn table() -> &'static FxHashMap<char, &'static str> {
    TABLE.get_or_init(|| {
        let mut map = FxHashMap::with_capacity_and_hasher(ENTRIES.len(), Default::default());
        map.extend(ENTRIES.iter().copied());
        map
    })
}

/// Look up the ASCII replacement for `ch`.
///
/// Returns `None` when `ch` is not a recognized special character. The casing
/// of the replacement follows the visual form of `ch` but is not guaranteed;
/// callers that need a specific case should convert the whole replacement.
#[inline]
pub fn lookup(ch: char) -> Option<&'static str> {
    table().get(&ch).copied()
}

/// Number of entries in the table.
pub fn len() -> usize {
    ENTRIES.len()
}

/// All entries in table order.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    ENTRIES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn test_ligatures() {
        assert_eq!(lookup('æ'), Some("ae"));
        assert_eq!(lookup('Æ'), Some("AE"));
        assert_eq!(lookup('œ'), Some("oe"));
        assert_eq!(lookup('Œ'), Some("OE"));
        assert_eq!(lookup('ß'), Some("ss"));
        assert_eq!(lookup('ẞ'), Some("SS"));
    }

    #[test]
    fn test_nordic_and_greek_letters() {
        assert_eq!(lookup('ð'), Some("d"));
        assert_eq!(lookup('Ð'), Some("D"));
        assert_eq!(lookup('ø'), Some("o"));
        assert_eq!(lookup('Ø'), Some("O"));
        assert_eq!(lookup('þ'), Some("p"));
        assert_eq!(lookup('Þ'), Some("P"));
        assert_eq!(lookup('µ'), Some("u"));
    }

    #[test]
    fn test_variant_forms() {
        assert_eq!(lookup('ł'), Some("l"));
        assert_eq!(lookup('đ'), Some("d"));
        assert_eq!(lookup('ƒ'), Some("f"));
        assert_eq!(lookup('Ａ'), Some("A"));
        assert_eq!(lookup('ｚ'), Some("z"));
        assert_eq!(lookup('５'), Some("5"));
        assert_eq!(lookup('ᵃ'), Some("a"));
        assert_eq!(lookup('₇'), Some("7"));
        assert_eq!(lookup('Ⓩ'), Some("(Z)"));
        assert_eq!(lookup('⒜'), Some("(a)"));
        assert_eq!(lookup('①'), Some("(1)"));
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('é'), None);
        assert_eq!(lookup('日'), None);
        assert_eq!(lookup('-'), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: std::collections::HashSet<char> = entries().map(|(c, _)| c).collect();
        assert_eq!(keys.len(), len());
    }

    #[test]
    fn test_keys_are_decomposition_stable() {
        for (ch, _) in entries() {
            let nfd: String = ch.to_string().nfd().collect();
            assert_eq!(nfd, ch.to_string(), "U+{:04X} decomposes", ch as u32);
        }
    }

    #[test]
    fn test_values_are_ascii_safe() {
        for (ch, value) in entries() {
            let inner = value
                .strip_prefix('(')
                .and_then(|v| v.strip_suffix(')'))
                .unwrap_or(value);
            assert!(
                !inner.is_empty()
                    && inner.len() <= 3
                    && inner.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
                "U+{:04X} maps to {:?}",
                ch as u32,
                value
            );
        }
    }
}
