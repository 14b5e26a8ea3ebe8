//! Behavioral tests over realistic palettes.
//!
//! Each test pins down one externally visible guarantee of the catalog: the
//! worked examples for both query directions, and the properties that have
//! to hold for any palette.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::catalog::{BitDepth, Catalog, IndexSpec, PaletteMetadata, RawPalette, RgbData};
    use crate::error::QueryError;
    use crate::metric::DistanceMetric;
    use crate::names::levenshtein;

    fn hex_palette(key: &str, index: IndexSpec, colors: &[(&str, &str)]) -> RawPalette {
        let rows = colors
            .iter()
            .map(|(_, hex)| {
                let v = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap();
                vec![
                    u64::from((v >> 16) & 0xFF),
                    u64::from((v >> 8) & 0xFF),
                    u64::from(v & 0xFF),
                ]
            })
            .collect();
        RawPalette {
            key: key.to_string(),
            names: colors.iter().map(|(name, _)| name.to_string()).collect(),
            rgb: RgbData::Integer {
                depth: BitDepth::Eight,
                rows,
            },
            index,
            metadata: PaletteMetadata::default(),
        }
    }

    fn html4() -> RawPalette {
        hex_palette(
            "HTML4",
            IndexSpec::None,
            &[
                ("Aqua", "#00FFFF"),
                ("Black", "#000000"),
                ("Blue", "#0000FF"),
                ("Fuchsia", "#FF00FF"),
                ("Gray", "#808080"),
                ("Green", "#008000"),
                ("Lime", "#00FF00"),
                ("Maroon", "#800000"),
                ("Navy", "#000080"),
                ("Olive", "#808000"),
                ("Purple", "#800080"),
                ("Red", "#FF0000"),
                ("Silver", "#C0C0C0"),
                ("Teal", "#008080"),
                ("White", "#FFFFFF"),
                ("Yellow", "#FFFF00"),
            ],
        )
    }

    fn matlab() -> RawPalette {
        hex_palette(
            "MATLAB",
            IndexSpec::None,
            &[
                ("Black", "#000000"),
                ("Blue", "#0000FF"),
                ("Cyan", "#00FFFF"),
                ("Green", "#00FF00"),
                ("Magenta", "#FF00FF"),
                ("Red", "#FF0000"),
                ("White", "#FFFFFF"),
                ("Yellow", "#FFFF00"),
            ],
        )
    }

    fn natural() -> RawPalette {
        hex_palette(
            "Natural",
            IndexSpec::None,
            &[
                ("Black", "#000000"),
                ("Blue", "#0000FF"),
                ("Green", "#00FF00"),
                ("Red", "#FF0000"),
                ("White", "#FFFFFF"),
                ("Yellow", "#FFFF00"),
            ],
        )
    }

    fn ral() -> RawPalette {
        hex_palette(
            "RAL",
            IndexSpec::Auto,
            &[
                ("9010 Pure white", "#F1ECE1"),
                ("1000 Green beige", "#CDBA88"),
                ("1001 Beige", "#D0B084"),
                ("1002 Sand yellow", "#D2AA6D"),
                ("1003 Signal yellow", "#F9A800"),
                ("3000 Flame red", "#A72920"),
                ("5000 Violet blue", "#314F6F"),
                ("9005 Jet black", "#0E0E10"),
            ],
        )
    }

    fn x11() -> RawPalette {
        hex_palette(
            "X11",
            IndexSpec::None,
            &[
                ("DarkSlateGray", "#2F4F4F"),
                ("SlateGray", "#708090"),
                ("LightSlateGray", "#778899"),
                ("DarkBlue", "#00008B"),
                ("Blue", "#0000FF"),
                ("LightBlue", "#ADD8E6"),
                ("Café au Lait", "#A67B5B"),
                ("Yellow Ochre", "#CB9D06"),
                ("Payne's Grey", "#536878"),
            ],
        )
    }

    fn catalog() -> Catalog {
        Catalog::load([html4(), matlab(), natural(), ral(), x11()]).unwrap()
    }

    fn names(entries: &[&crate::ColorEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn assert_rgb(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{actual:?} != {expected:?}");
        }
    }

    // ========================================================================
    // Worked examples
    // ========================================================================

    #[test]
    fn test_html4_names_resolve_to_rgb() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names("HTML4", &["blue", "RED", "Teal", "olive"])
            .unwrap();
        let rgb: Vec<[f64; 3]> = entries.iter().map(|e| e.rgb.to_array()).collect();
        assert_rgb(rgb[0], [0.0, 0.0, 1.0]);
        assert_rgb(rgb[1], [1.0, 0.0, 0.0]);
        assert_rgb(rgb[2], [0.0, 0.502, 0.502]);
        assert_rgb(rgb[3], [0.502, 0.502, 0.0]);
    }

    #[test]
    fn test_html4_default_metric_is_perceptual() {
        let catalog = catalog();
        let samples = [[0.0, 0.5, 1.0], [1.0, 0.5, 0.0]];
        let matches = catalog.resolve_colors("HTML4", &samples, None).unwrap();
        let found: Vec<&str> = matches.iter().map(|m| m.entry.name.as_str()).collect();
        assert_eq!(found, vec!["Blue", "Red"]);
    }

    #[test]
    fn test_html4_rgb_metric_changes_result() {
        let catalog = catalog();
        let samples = [[0.0, 0.5, 1.0], [1.0, 0.5, 0.0]];
        let matches = catalog
            .resolve_colors("HTML4", &samples, Some(DistanceMetric::Rgb))
            .unwrap();
        let found: Vec<&str> = matches.iter().map(|m| m.entry.name.as_str()).collect();
        assert_eq!(found, vec!["Teal", "Olive"]);
    }

    #[test]
    fn test_matlab_single_letters() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names("MATLAB", &["c", "m", "y", "k"])
            .unwrap();
        assert_eq!(names(&entries), vec!["Cyan", "Magenta", "Yellow", "Black"]);
    }

    #[test]
    fn test_natural_unmatched_letter_has_suggestions() {
        let catalog = catalog();
        let err = catalog.resolve_names("Natural", &["Z"]).unwrap_err();
        let QueryError::UnmatchedNames { palette, unmatched } = err else {
            panic!("expected UnmatchedNames, got {err:?}");
        };
        assert_eq!(palette, "Natural");
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].query, "Z");
        assert_eq!(
            unmatched[0].suggestions,
            vec!["Black", "Blue", "Green", "Red", "White"]
        );
    }

    // ========================================================================
    // Name matching properties
    // ========================================================================

    /// Every name in every palette must find itself.
    #[test]
    fn test_every_name_resolves_to_itself() {
        let catalog = catalog();
        for palette in catalog.palettes() {
            let queries: Vec<&str> = palette.entries().iter().map(|e| e.name.as_str()).collect();
            let resolved = catalog.resolve_names(palette.key(), &queries).unwrap();
            for (query, entry) in queries.iter().zip(resolved) {
                assert_eq!(*query, entry.name, "palette {}", palette.key());
            }
        }
    }

    #[test]
    fn test_case_space_and_camel_case_variants() {
        let catalog = catalog();
        let variants = [
            "DarkSlateGray",
            "darkslategray",
            "Dark Slate Gray",
            "dark   slate gray",
            "DARK SLATE GREY",
            "darkSlateGrey",
        ];
        for entry in catalog.resolve_names("X11", &variants).unwrap() {
            assert_eq!(entry.name, "DarkSlateGray");
        }
    }

    #[test]
    fn test_query_punctuation_and_stray_spaces() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names("X11", &["dark-slate_gray", "Dark.Slate.Grey", "light bl ue"])
            .unwrap();
        assert_eq!(names(&entries), vec!["DarkSlateGray", "DarkSlateGray", "LightBlue"]);

        let err = catalog.resolve_names("X11", &["---"]).unwrap_err();
        assert!(matches!(err, QueryError::UnmatchedNames { .. }));
    }

    #[test]
    fn test_spelling_and_punctuation_variants() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names(
                "X11",
                &["cafe au lait", "CAFÉ AU LAIT", "yellow ocher", "Payne\u{2019}s Gray"],
            )
            .unwrap();
        assert_eq!(
            names(&entries),
            vec!["Café au Lait", "Café au Lait", "Yellow Ochre", "Payne's Grey"]
        );
    }

    #[test]
    fn test_ambiguous_query_prefers_closest_name() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names("X11", &["blue", "slate gray", "lightblue"])
            .unwrap();
        assert_eq!(names(&entries), vec!["Blue", "SlateGray", "LightBlue"]);
    }

    #[test]
    fn test_index_tokens_and_initials() {
        let catalog = catalog();
        let entries = catalog
            .resolve_names("RAL", &["1001", "3000", "9005", "1000GreenBeige", "f"])
            .unwrap();
        assert_eq!(
            names(&entries),
            vec![
                "1001 Beige",
                "3000 Flame red",
                "9005 Jet black",
                "1000 Green beige",
                "3000 Flame red",
            ]
        );
    }

    #[test]
    fn test_indexed_palette_sorts_numerically() {
        let catalog = catalog();
        let order: Vec<&str> = catalog
            .get_palette("ral")
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                "1000 Green beige",
                "1001 Beige",
                "1002 Sand yellow",
                "1003 Signal yellow",
                "3000 Flame red",
                "5000 Violet blue",
                "9005 Jet black",
                "9010 Pure white",
            ]
        );
    }

    #[test]
    fn test_batch_reports_every_unmatched_query() {
        let catalog = catalog();
        let err = catalog
            .resolve_names("HTML4", &["red", "qqq", "blue", "zzz"])
            .unwrap_err();
        let QueryError::UnmatchedNames { unmatched, .. } = err else {
            panic!("expected UnmatchedNames");
        };
        let positions: Vec<usize> = unmatched.iter().map(|u| u.position).collect();
        assert_eq!(positions, vec![1, 3]);
        assert!(unmatched.iter().all(|u| !u.suggestions.is_empty()));
    }

    #[test]
    fn test_suggestions_ascend_by_distance() {
        let catalog = catalog().with_suggestion_limit(16);
        let err = catalog.resolve_names("HTML4", &["marooon x"]).unwrap_err();
        let QueryError::UnmatchedNames { unmatched, .. } = err else {
            panic!("expected UnmatchedNames");
        };
        let suggestions = &unmatched[0].suggestions;
        assert_eq!(suggestions.len(), 16);
        assert_eq!(suggestions[0], "Maroon");

        let state = catalog.palette("HTML4").unwrap().normalization();
        let ranked = crate::diagnostic::rank(state, &state.normalize_query("marooon x"), 16);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(ranked[0].distance, levenshtein("marooon x", "maroon"));
    }

    #[test]
    fn test_warm_cache_matches_cold() {
        let catalog = catalog();
        let queries = ["blue", "RED", "t", "Fuchsia", "grey"];
        let palette = catalog.palette("HTML4").unwrap();
        assert!(!palette.is_normalized());

        let cold = names(&catalog.resolve_names("HTML4", &queries).unwrap());
        assert!(palette.is_normalized());
        let warm = names(&catalog.resolve_names("HTML4", &queries).unwrap());
        assert_eq!(cold, warm);
        assert_eq!(cold, vec!["Blue", "Red", "Teal", "Fuchsia", "Gray"]);
    }

    // ========================================================================
    // Color matching properties
    // ========================================================================

    #[test]
    fn test_color_results_independent_of_sample_order() {
        let catalog = catalog();
        let samples = [
            [0.1, 0.2, 0.3],
            [0.9, 0.9, 0.1],
            [0.5, 0.0, 0.5],
            [0.7, 0.7, 0.7],
            [0.0, 0.6, 0.1],
        ];
        let mut reversed = samples;
        reversed.reverse();
        for metric in DistanceMetric::ALL {
            let forward = catalog.resolve_colors("HTML4", &samples, Some(metric)).unwrap();
            let backward = catalog.resolve_colors("HTML4", &reversed, Some(metric)).unwrap();
            let mut backward: Vec<_> = backward.iter().map(|m| m.entry.index).collect();
            backward.reverse();
            let forward: Vec<_> = forward.iter().map(|m| m.entry.index).collect();
            assert_eq!(forward, backward, "{metric}");
        }
    }

    #[test]
    fn test_palette_colors_match_themselves() {
        let catalog = catalog();
        for palette in catalog.palettes() {
            let samples: Vec<[f64; 3]> =
                palette.entries().iter().map(|e| e.rgb.to_array()).collect();
            for metric in DistanceMetric::ALL {
                let matches = catalog
                    .resolve_colors(palette.key(), &samples, Some(metric))
                    .unwrap();
                for (entry, m) in palette.entries().iter().zip(&matches) {
                    assert_eq!(m.entry.index, entry.index, "{} {metric}", palette.key());
                    assert_eq!(m.distance, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_euclidean_metrics_symmetric_over_palette() {
        let catalog = catalog();
        let entries = catalog.get_palette("HTML4").unwrap();
        for metric in DistanceMetric::ALL.into_iter().filter(|m| m.is_symmetric()) {
            for a in entries {
                for b in entries {
                    let ab = metric.distance(a.rgb, b.rgb);
                    let ba = metric.distance(b.rgb, a.rgb);
                    assert!((ab - ba).abs() < 1e-12, "{metric}: {} / {}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_invalid_samples_fail_whole_batch() {
        let catalog = catalog();
        let err = catalog
            .resolve_colors("HTML4", &[[0.5, 0.5, 0.5], [0.5, f64::INFINITY, 2.0]], None)
            .unwrap_err();
        let QueryError::InvalidInput { invalid, .. } = err else {
            panic!("expected InvalidInput");
        };
        assert_eq!(invalid.len(), 2);
        assert_eq!((invalid[0].row, invalid[0].column), (1, 1));
        assert_eq!((invalid[1].row, invalid[1].column), (1, 2));
    }

    #[test]
    fn test_metric_names_parse_for_queries() {
        let catalog = catalog();
        let metric: DistanceMetric = "rgb".parse().unwrap();
        let m = catalog
            .resolve_colors("html4", &[[0.0, 0.5, 1.0]], Some(metric))
            .unwrap();
        assert_eq!(m[0].entry.name, "Teal");

        let err = QueryError::from("CIE2050".parse::<DistanceMetric>().unwrap_err());
        assert!(matches!(err, QueryError::UnsupportedMetric(_)));
    }
}
