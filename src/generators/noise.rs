//! Wall placement by thresholding 2D Perlin noise.
//!
//! Unlike carving, this produces organic cave-like floor regions with no connectivity
//! guarantee, so goal placement has to check reachability.

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::Result,
    maze::{Grid, Tile},
};

/// Shape of the noise field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Number of noise periods spanned by the grid. Higher values give smaller blobs.
    pub density: f32,
    /// Cells whose noise value exceeds this become walls. Noise is in `[0, 1]`.
    pub threshold: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            density: 13.0,
            threshold: 0.5,
        }
    }
}

/// Seeded gradient noise. The permutation table is shuffled from the caller's RNG so that
/// the field is reproducible for a given seed.
struct Perlin {
    perm: [u8; 256],
}

impl Perlin {
    fn new<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut perm = [0u8; 256];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        perm.shuffle(rng);
        Self { perm }
    }

    #[inline]
    fn perm(&self, x: i32) -> u8 {
        self.perm[(x & 255) as usize]
    }

    /// 2D Perlin noise remapped to `[0, 1]`.
    fn sample(&self, x: f32, y: f32) -> f32 {
        let xi = x.floor() as i32;
        let yi = y.floor() as i32;

        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.perm(self.perm(xi) as i32 + yi);
        let ab = self.perm(self.perm(xi) as i32 + yi + 1);
        let ba = self.perm(self.perm(xi + 1) as i32 + yi);
        let bb = self.perm(self.perm(xi + 1) as i32 + yi + 1);

        let x1 = lerp(grad2(aa, xf, yf), grad2(ba, xf - 1.0, yf), u);
        let x2 = lerp(grad2(ab, xf, yf - 1.0), grad2(bb, xf - 1.0, yf - 1.0), u);

        (lerp(x1, x2, v) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

#[inline]
fn grad2(hash: u8, x: f32, y: f32) -> f32 {
    let h = hash & 7;
    let u = if h < 4 { x } else { y };
    let v = if h < 4 { y } else { x };
    (if h & 1 != 0 { -u } else { u }) + (if h & 2 != 0 { -2.0 * v } else { 2.0 * v })
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Fills `grid` from a seeded noise field. Border cells are always walls.
pub fn noise_walls<R>(grid: &mut Grid, params: NoiseParams, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    let noise = Perlin::new(rng);
    let (width, height) = (grid.width() as f32, grid.height() as f32);
    let (half_width, half_height) = ((grid.width() / 2) as f32, (grid.height() / 2) as f32);

    for coord in grid.coords() {
        // Sample around the grid centre, like the tilemap the field was tuned for
        let nx = (coord.0 as f32 - half_width) / width * params.density;
        let ny = (coord.1 as f32 - half_height) / height * params.density;
        let tile = if grid.is_boundary(coord) || noise.sample(nx, ny) > params.threshold {
            Tile::Wall
        } else {
            Tile::Floor
        };
        grid.set(coord, tile)?;
    }

    tracing::debug!(
        "[noise] placed {} floor cells in a {}x{} grid (density {}, threshold {})",
        grid.floor_count(),
        grid.width(),
        grid.height(),
        params.density,
        params.threshold
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_noise_range() {
        let noise = Perlin::new(&mut get_rng(Some(1)));
        for i in 0..200 {
            let v = noise.sample(i as f32 * 0.37 - 20.0, i as f32 * 0.91 - 50.0);
            assert!((0.0..=1.0).contains(&v));
        }
        // Gradient noise vanishes on lattice points
        assert_eq!(noise.sample(3.0, -2.0), 0.5);
    }

    #[test]
    fn test_noise_walls_deterministic_per_seed() {
        let mut a = Grid::new(23, 23);
        let mut b = Grid::new(23, 23);
        noise_walls(&mut a, NoiseParams::default(), &mut get_rng(Some(9))).unwrap();
        noise_walls(&mut b, NoiseParams::default(), &mut get_rng(Some(9))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_walls_border_and_mix() {
        let mut grid = Grid::new(23, 23);
        noise_walls(&mut grid, NoiseParams::default(), &mut get_rng(Some(4))).unwrap();
        assert!(grid.coords().filter(|&c| grid.is_boundary(c)).all(|c| grid[c] == Tile::Wall));
        assert!(grid.floor_count() > 0);
        assert!(grid.coords().any(|c| !grid.is_boundary(c) && grid[c] == Tile::Wall));
    }

    #[test]
    fn test_threshold_extremes() {
        let mut grid = Grid::new(9, 9);
        let all_floor = NoiseParams {
            density: 5.0,
            threshold: 1.0,
        };
        noise_walls(&mut grid, all_floor, &mut get_rng(Some(0))).unwrap();
        assert_eq!(grid.floor_count(), 7 * 7);

        let all_wall = NoiseParams {
            density: 5.0,
            threshold: -1.0,
        };
        noise_walls(&mut grid, all_wall, &mut get_rng(Some(0))).unwrap();
        assert_eq!(grid.floor_count(), 0);
    }
}
