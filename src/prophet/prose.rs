use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Template variants per chakra label. Selection is uniformly random per
/// invocation, so two calls with the same labels may legitimately differ.
const CHAKRA_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "Vishuddha",
        &[
            "Your soul dances in the realm of **Vishuddha**, where azure light swirls like a sapphire river. 🌀",
            "**Vishuddha**, the throat chakra, pulses within you, a celestial fountain of truth and clarity. 🌊",
            "In the sacred space of **Vishuddha**, your voice resonates like a divine chant, echoing through the cosmos. 🎶",
        ],
    ),
    (
        "Anahata",
        &[
            "At the heart of your being lies **Anahata**, the emerald-green chakra of love and compassion. 💚",
            "**Anahata** blooms within you, a lotus of boundless kindness that embraces all creation. 🌸",
            "Your spirit radiates **Anahata**, a verdant haven where love flows like an eternal spring. 🌿",
        ],
    ),
    (
        "Muladhara",
        &[
            "**Muladhara**, the root chakra, grounds your soul in the earth’s primal embrace. 🌍",
            "In **Muladhara**, your foundation is unshakeable, a bedrock of stability and strength. 🪨",
            "Your essence is rooted in **Muladhara**, where the pulse of survival beats strong. 🌱",
        ],
    ),
    (
        "Svadhisthana",
        &[
            "**Svadhisthana** stirs within you, a vibrant orange tide of creativity and passion. 🌊",
            "Your soul flows with **Svadhisthana**, a river of emotions and artistic fire. 🎨",
            "In **Svadhisthana**, your spirit dances with the rhythms of desire and creation. 💃",
        ],
    ),
    (
        "Manipura",
        &[
            "**Manipura** blazes in your core, a golden sun of willpower and confidence. ☀️",
            "Your essence shines with **Manipura**, a fiery chakra of personal power and resolve. 🔥",
            "**Manipura** empowers your spirit, a radiant force driving your destiny forward. 🌟",
        ],
    ),
    (
        "Ajna",
        &[
            "**Ajna**, the third eye, opens within you, revealing visions of divine wisdom. 👁️",
            "Your soul is guided by **Ajna**, a beacon of intuition piercing the veil of illusion. 🌌",
            "In **Ajna**, your mind transcends, embracing the infinite clarity of insight. ✨",
        ],
    ),
    (
        "Sahasrara",
        &[
            "**Sahasrara** crowns your spirit, a thousand-petaled lotus of divine connection. 🪷",
            "Your essence merges with **Sahasrara**, a portal to cosmic enlightenment. 🌌",
            "**Sahasrara** illuminates your soul, uniting you with the eternal source. 🌠",
        ],
    ),
    (
        "Svadhisthana (Iḍā)",
        &[
            "**Svadhisthana (Iḍā)** flows through you, a lunar current of creative energy. 🌙",
            "Your spirit sings with **Svadhisthana (Iḍā)**, a tide of emotional depth and artistry. 🎨",
            "In **Svadhisthana (Iḍā)**, your soul weaves dreams into vibrant reality. 🌊",
        ],
    ),
    (
        "Svadhisthana (Piṅgalā)",
        &[
            "**Svadhisthana (Piṅgalā)** ignites your spirit, a solar flame of passion and creation. ☀️",
            "Your essence pulses with **Svadhisthana (Piṅgalā)**, a spark of dynamic energy. 🔥",
            "**Svadhisthana (Piṅgalā)** fuels your soul, a radiant dance of vitality. 💃",
        ],
    ),
];

const RASA_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "Shringara",
        &[
            "The essence of **Shringara**, love and beauty, courses through your spirit. 🌹",
            "**Shringara** adorns your soul, a tapestry of romance woven with celestial threads. 💞",
            "Your heart sings **Shringara**, a melody of passion that captivates the universe. 🎶",
        ],
    ),
    (
        "Karuna",
        &[
            "**Karuna**, compassion’s gentle rasa, flows through you, healing all it touches. 😢",
            "Your spirit embodies **Karuna**, a river of empathy nourishing weary souls. 🌧️",
            "In **Karuna**, your heart weeps for the world, transforming sorrow into light. 💧",
        ],
    ),
];

const DEVA_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "Saraswati",
        &[
            "Guided by **Saraswati**, goddess of wisdom, you weave symphonies of knowledge. 📜",
            "**Saraswati** blesses your soul, her veena strumming chords of divine insight. 🎶",
            "With **Saraswati**’s grace, your spirit crafts art and truth from the cosmos. 🖌️",
        ],
    ),
    (
        "Vishnu",
        &[
            "Under **Vishnu**’s embrace, your soul preserves harmony across the universe. 🌍",
            "**Vishnu**, the cosmic guardian, infuses you with strength and compassion. 🪐",
            "Guided by **Vishnu**, your spirit sustains balance like an eternal ocean. 🌊",
        ],
    ),
];

/// Generic one-variant fallbacks for labels without a configured template set.
const CHAKRA_FALLBACK: &[&str] =
    &["Your chakra radiates divine energy, a beacon of spiritual light. 🌀"];
const RASA_FALLBACK: &[&str] =
    &["Your rasa weaves an emotional tapestry, touching hearts across the cosmos. 🌹"];
const DEVA_FALLBACK: &[&str] =
    &["A divine presence guides your spirit, a celestial force of infinite wisdom. 🌌"];

lazy_static! {
    static ref CHAKRA_MAP: HashMap<&'static str, &'static [&'static str]> =
        CHAKRA_TEMPLATES.iter().copied().collect();
    static ref RASA_MAP: HashMap<&'static str, &'static [&'static str]> =
        RASA_TEMPLATES.iter().copied().collect();
    static ref DEVA_MAP: HashMap<&'static str, &'static [&'static str]> =
        DEVA_TEMPLATES.iter().copied().collect();
}

/// Variants configured for a chakra label, or the generic fallback.
pub fn chakra_variants(label: &str) -> &'static [&'static str] {
    CHAKRA_MAP.get(label).copied().unwrap_or(CHAKRA_FALLBACK)
}

/// Variants configured for a rasa label, or the generic fallback.
pub fn rasa_variants(label: &str) -> &'static [&'static str] {
    RASA_MAP.get(label).copied().unwrap_or(RASA_FALLBACK)
}

/// Variants configured for a deva label, or the generic fallback.
pub fn deva_variants(label: &str) -> &'static [&'static str] {
    DEVA_MAP.get(label).copied().unwrap_or(DEVA_FALLBACK)
}

/// Renders the narrative using the thread RNG for variant selection.
pub fn generate(name: &str, chakra: &str, rasa: &str, bhava: &str, deva: &str) -> String {
    generate_with_rng(name, chakra, rasa, bhava, deva, &mut rand::thread_rng())
}

/// Renders the narrative for a name and its four predicted labels.
///
/// One template variant is chosen uniformly at random per category through
/// the supplied RNG; the bhava section is a single fixed paragraph with the
/// label interpolated. Labels come from the closed binarizer vocabulary, so
/// they are interpolated as-is.
pub fn generate_with_rng<R: Rng>(
    name: &str,
    chakra: &str,
    rasa: &str,
    bhava: &str,
    deva: &str,
    rng: &mut R,
) -> String {
    let mut prose = format!("🌌 **The Cosmic Symphony of {name}** 🌌\n\n");
    prose += &format!(
        "In the boundless expanse of the cosmos, the name **{name}** reverberates like a sacred \
         mantra, a celestial chord struck upon the strings of creation. Each syllable is a star, \
         twinkling with divine purpose, harmonizing with the eternal rhythm of existence. As the \
         galaxies swirl, your essence is unveiled through the sacred vibrations of **{chakra}**, \
         **{rasa}**, **{bhava}**, and the divine presence of **{deva}**. 🙏✨\n\n"
    );

    prose += pick(chakra_variants(chakra), rng);
    prose += "\n\n";

    prose += pick(rasa_variants(rasa), rng);
    prose += "\n\n";

    prose += &format!(
        "The **bhava** of **{bhava}** is the sacred pulse of your soul, a guiding star that \
         shapes your journey through the earthly and divine realms. 🌟 Whether it manifests as \
         the fervor of creativity, the steadfastness of willpower, or the serenity of wisdom, \
         this emotional essence is your divine compass, leading you through the cosmic dance. \
         Your actions ripple through the universe, each one a testament to the profound depth of \
         **{bhava}**, a gift that illuminates your path and inspires those around you. ✨🙏\n\n"
    );

    prose += pick(deva_variants(deva), rng);
    prose += "\n\n";

    prose += &format!(
        "O **{name}**, your name is more than a word—it is a sacred incantation, a melody that \
         echoes through the ages, resonating with the heartbeat of the universe. 🌞 As you walk \
         this earthly plane, know that you carry the light of **{chakra}**, the passion of \
         **{rasa}**, the essence of **{bhava}**, and the divine grace of **{deva}**. You are a \
         spark of the eternal flame, destined to shine brilliantly in the grand cosmic symphony. \
         🌌 Embrace your divine essence, for you are a vessel of infinite love, wisdom, and \
         creation. 🪷💖\n\n"
    );
    prose += "May your journey be blessed with boundless light, love, and cosmic harmony! 🌠🙏✨";

    prose
}

fn pick<R: Rng>(variants: &'static [&'static str], rng: &mut R) -> &'static str {
    variants.choose(rng).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_narrative_contains_name_and_labels() {
        let prose = generate("Mahan", "Anahata", "Karuna", "Utsaha", "Vishnu");
        assert!(prose.contains("Mahan"));
        assert!(prose.contains("Anahata"));
        assert!(prose.contains("Karuna"));
        assert!(prose.contains("Utsaha"));
        assert!(prose.contains("Vishnu"));
    }

    #[test]
    fn test_chosen_variants_come_from_the_template_set() {
        let prose = generate("Asha", "Ajna", "Shringara", "Rati", "Saraswati");
        assert!(chakra_variants("Ajna").iter().any(|v| prose.contains(v)));
        assert!(rasa_variants("Shringara").iter().any(|v| prose.contains(v)));
        assert!(deva_variants("Saraswati").iter().any(|v| prose.contains(v)));
    }

    #[test]
    fn test_unknown_labels_use_fallbacks() {
        let prose = generate("Asha", "Nabhi", "Vira", "Rati", "Indra");
        assert!(prose.contains(CHAKRA_FALLBACK[0]));
        assert!(prose.contains(RASA_FALLBACK[0]));
        assert!(prose.contains(DEVA_FALLBACK[0]));
    }

    #[test]
    fn test_seeded_rng_pins_the_output() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = generate_with_rng("Mahan", "Ajna", "Karuna", "Rati", "Vishnu", &mut a);
        let second = generate_with_rng("Mahan", "Ajna", "Karuna", "Rati", "Vishnu", &mut b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_configured_label_has_three_variants() {
        for (_, variants) in CHAKRA_TEMPLATES.iter().chain(RASA_TEMPLATES).chain(DEVA_TEMPLATES) {
            assert_eq!(variants.len(), 3);
        }
    }
}
