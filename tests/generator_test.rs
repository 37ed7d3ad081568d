use passforge::charset::CharacterClass;
use passforge::generator::{generate, GenerationSettings};
use passforge::strength::{color_tier_for, label_for, score, ColorTier};

// Generate then rate, the way a front end drives the library.
#[test]
fn generated_passwords_with_all_classes_rate_very_strong() {
    let settings = GenerationSettings {
        length: 16,
        include_lowercase: true,
        include_uppercase: true,
        include_numbers: true,
        include_symbols: true,
    };

    for _ in 0..20 {
        let password = generate(&settings);
        let s = score(password.as_str());

        assert_eq!(16, password.len());
        for class in CharacterClass::ALL {
            assert!(password.as_str().chars().any(|c| class.contains(c)));
        }
        // length and variety alone give 70, at least 8 distinct chars add 15 more
        assert!(s >= 85, "score {s}");
        assert_eq!("Very Strong", label_for(s));
        assert_eq!(ColorTier::Green, color_tier_for(s));
    }
}

#[test]
fn default_settings_generate_alphanumeric_passwords() {
    let password = generate(&GenerationSettings::default());

    assert_eq!(12, password.len());
    assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn nothing_selected_falls_back_to_lowercase() {
    let settings = GenerationSettings {
        length: 9,
        include_lowercase: false,
        include_uppercase: false,
        include_numbers: false,
        include_symbols: false,
    };

    let password = generate(&settings);

    assert_eq!(9, password.len());
    assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
}
