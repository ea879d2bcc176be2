//! Tests for occurrence counting across orientations and the roughness formula

#[cfg(test)]
mod tests {
    use crate::SAMPLE;
    use tilemosaic::algorithm::assembler::assemble;
    use tilemosaic::algorithm::stitcher::to_picture;
    use tilemosaic::analysis::pattern::Pattern;
    use tilemosaic::analysis::roughness::{
        count_markers, count_occurrences, find_occurrences, roughness, water_roughness,
    };
    use tilemosaic::io::input::parse_tiles;
    use tilemosaic::spatial::symmetry::Symmetry;
    use tilemosaic::spatial::tile::Tile;

    fn sample_picture() -> Tile {
        to_picture(assemble(&parse_tiles(SAMPLE).unwrap()).unwrap()).unwrap()
    }

    // Tests the fixture holds two sea monsters in exactly one orientation
    // Verified by summing matches over every orientation
    #[test]
    fn test_sample_monsters() {
        let picture = sample_picture();
        let monster = Pattern::sea_monster();

        let sighting = find_occurrences(&monster, &picture).unwrap();
        assert_eq!(sighting.count(), 2);
        assert_eq!(count_occurrences(&monster, &picture), 2);

        let oriented_counts: Vec<usize> = Symmetry::ALL
            .iter()
            .map(|&symmetry| monster.positions(picture.transformed(symmetry).pixels()).len())
            .collect();
        assert_eq!(oriented_counts.iter().filter(|&&count| count > 0).count(), 1);
        assert_eq!(oriented_counts[sighting.symmetry.index()], 2);
    }

    // Tests the search stops at the first orientation with a match
    // Verified by continuing to the orientation with the most matches
    #[test]
    fn test_first_matching_orientation_wins() {
        let tile = Tile::from_rows(1, &["#..", "...", "..."]).unwrap();
        let pattern = Pattern::parse(&["#"]).unwrap();

        let sighting = find_occurrences(&pattern, &tile).unwrap();
        assert_eq!(sighting.symmetry, Symmetry::Identity);
        assert_eq!(sighting.positions, vec![(0, 0)]);

        let bar = Pattern::parse(&["#", "#"]).unwrap();
        let row = Tile::from_rows(2, &["##", ".."]).unwrap();
        let found = find_occurrences(&bar, &row).unwrap();
        assert_eq!(found.symmetry, Symmetry::Rotate90);
        assert_eq!(found.count(), 1);
    }

    // Tests a pattern absent from every orientation counts zero
    // Verified by returning the last orientation's count
    #[test]
    fn test_no_occurrences() {
        let tile = Tile::from_rows(1, &["...", "...", "..."]).unwrap();
        assert!(find_occurrences(&Pattern::parse(&["#"]).unwrap(), &tile).is_none());
        assert_eq!(count_occurrences(&Pattern::sea_monster(), &tile), 0);
    }

    // Tests marker counting is orientation invariant
    // Verified by counting blank pixels
    #[test]
    fn test_count_markers() {
        let picture = sample_picture();
        assert_eq!(count_markers(&picture), 303);
        for (_, oriented) in picture.orientations() {
            assert_eq!(count_markers(&oriented), 303);
        }
        assert_eq!(
            count_markers(&picture),
            count_occurrences(&Pattern::parse(&["#"]).unwrap(), &picture)
        );
    }

    // Tests roughness subtracts fifteen cells per monster
    // Verified by subtracting the monster count instead
    #[test]
    fn test_roughness_formula() {
        let picture = sample_picture();
        let monsters = count_occurrences(&Pattern::sea_monster(), &picture);
        assert_eq!(
            roughness(&picture).unwrap(),
            count_markers(&picture) - 15 * monsters
        );
        assert_eq!(roughness(&picture).unwrap(), 273);
    }

    // Tests a picture without monsters is all rough water
    // Verified by failing when no monster is found
    #[test]
    fn test_roughness_without_monsters() {
        let tile = Tile::from_rows(1, &["#.#", "...", "#.."]).unwrap();
        assert_eq!(roughness(&tile).unwrap(), 3);
    }

    // Tests the mosaic entry point stitches before measuring
    // Verified by measuring the unstitched corner tile
    #[test]
    fn test_water_roughness() {
        let mosaic = assemble(&parse_tiles(SAMPLE).unwrap()).unwrap();
        assert_eq!(water_roughness(mosaic).unwrap(), 273);
    }
}
