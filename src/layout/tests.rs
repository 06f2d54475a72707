use super::*;

const SIZES: [usize; 12] = [0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17];

fn sample(n: usize) -> Vec<Vector3> {
    (0..n)
        .map(|i| {
            let i = i as f32;
            Vector3::new(i, 100.0 + i, -i - 0.5)
        })
        .collect()
}

// ======================== SoA ========================

#[test]
fn soa_deinterleaves() {
    let src = sample(3);
    let (mut x, mut y, mut z) = ([0.0; 3], [0.0; 3], [0.0; 3]);
    aos_to_soa(&src, &mut x, &mut y, &mut z, 3);
    assert_eq!(x, [0.0, 1.0, 2.0]);
    assert_eq!(y, [100.0, 101.0, 102.0]);
    assert_eq!(z, [-0.5, -1.5, -2.5]);
}

#[test]
fn soa_round_trip_every_n() {
    for n in SIZES {
        let src = sample(n);
        let (mut x, mut y, mut z) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
        aos_to_soa(&src, &mut x, &mut y, &mut z, n);

        let mut back = vec![Vector3::ZERO; n];
        soa_to_aos(&x, &y, &z, &mut back, n);
        assert_eq!(back, src, "n={n}");
    }
}

// ======================== Tiled ========================

#[test]
fn tiled_component_order() {
    let lanes = LaneWidth::new(4).unwrap();
    let src = sample(8);
    let mut tiles = vec![f32::NAN; lanes.tiled_len(8)];
    aos_to_tiled(&src, &mut tiles, 8, lanes);

    for t in 0..2 {
        let base = t * 12;
        for i in 0..4 {
            let v = src[t * 4 + i];
            assert_eq!(tiles[base + i], v.x, "tile={t} lane={i}");
            assert_eq!(tiles[base + 4 + i], v.y, "tile={t} lane={i}");
            assert_eq!(tiles[base + 8 + i], v.z, "tile={t} lane={i}");
        }
    }
}

#[test]
fn tiled_round_trip_exact_multiples() {
    for width in [1, 2, 4, 8, 16] {
        let lanes = LaneWidth::new(width).unwrap();
        for tiles_count in 0..4 {
            let n = tiles_count * width;
            let src = sample(n);
            let mut tiles = vec![0.0_f32; lanes.tiled_len(n)];
            assert_eq!(tiles.len(), 3 * n);
            aos_to_tiled(&src, &mut tiles, n, lanes);

            let mut back = vec![Vector3::ZERO; n];
            tiled_to_aos(&tiles, &mut back, n, lanes);
            assert_eq!(back, src, "lanes={width} n={n}");
        }
    }
}

#[test]
fn tiled_round_trip_partial_tile() {
    for width in [2, 4, 8, 16] {
        let lanes = LaneWidth::new(width).unwrap();
        for n in SIZES.into_iter().filter(|n| n % width != 0) {
            let src = sample(n);
            let mut tiles = vec![f32::NAN; lanes.tiled_len(n)];
            aos_to_tiled(&src, &mut tiles, n, lanes);

            // Every slot written, none left as the NaN fill.
            assert!(tiles.iter().all(|v| !v.is_nan()), "lanes={width} n={n}");

            let mut back = vec![Vector3::ZERO; n];
            tiled_to_aos(&tiles, &mut back, n, lanes);
            assert_eq!(back, src, "lanes={width} n={n}");
        }
    }
}

#[test]
fn partial_tile_is_padded() {
    let lanes = LaneWidth::new(4).unwrap();
    let src = sample(5);
    let mut tiles = vec![f32::NAN; lanes.tiled_len(5)];
    assert_eq!(tiles.len(), 24);
    aos_to_tiled(&src, &mut tiles, 5, lanes);

    let tail = &tiles[12..];
    assert_eq!(tail[0], src[4].x);
    assert_eq!(tail[4], src[4].y);
    assert_eq!(tail[8], src[4].z);
    for component in 0..3 {
        for lane in 1..4 {
            assert_eq!(tail[component * 4 + lane], TILE_PAD, "component={component} lane={lane}");
        }
    }
}

#[test]
fn tiled_leaves_buffer_beyond_tiles_untouched() {
    let lanes = LaneWidth::new(2).unwrap();
    let src = sample(3);
    let mut tiles = [9.0_f32; 14];
    aos_to_tiled(&src, &mut tiles, 3, lanes);
    assert_eq!(&tiles[12..], &[9.0, 9.0]);
}

#[test]
fn scalar_lane_width_is_aos() {
    let src = sample(4);
    let mut tiles = [0.0_f32; 12];
    aos_to_tiled(&src, &mut tiles, 4, LaneWidth::SCALAR);
    for (i, v) in src.iter().enumerate() {
        assert_eq!(&tiles[3 * i..3 * i + 3], &[v.x, v.y, v.z]);
    }
}

#[test]
#[should_panic]
fn tiled_rejects_unpadded_destination() {
    let lanes = LaneWidth::new(4).unwrap();
    let src = sample(5);
    let mut tiles = [0.0_f32; 15];
    aos_to_tiled(&src, &mut tiles, 5, lanes);
}

// ======================== Aligned ========================

#[test]
fn aligned_round_trip() {
    let src = sample(7);
    let mut aligned = vec![Vector3Aligned::ZERO; 7];
    aos_to_aligned(&src, &mut aligned, 7);
    assert!(aligned.iter().all(|v| v.w() == crate::vector::PAD_LANE));

    let mut back = vec![Vector3::ZERO; 7];
    aligned_to_aos(&aligned, &mut back, 7);
    assert_eq!(back, src);
}

// ======================== Layout tag ========================

#[test]
fn scalars_required_per_layout() {
    let lanes = LaneWidth::new(8).unwrap();
    assert_eq!(Layout::ArrayOfStructures.scalars_required(10, lanes), 30);
    assert_eq!(Layout::StructureOfArrays.scalars_required(10, lanes), 30);
    assert_eq!(Layout::TiledArrayOfStructuresOfArrays.scalars_required(10, lanes), 48);
    assert_eq!(Layout::TiledArrayOfStructuresOfArrays.scalars_required(16, lanes), 48);
}
