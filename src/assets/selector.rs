//! Uniform random picks over folders of images
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;

use super::category::{character_dir, vehicle_dir, Size, VehicleType};
use super::list_images;
use crate::error::AssetError;

/// Uniformly choose one element, or `None` for an empty slice
pub fn choose<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Select a random image from `folder` (non-recursive)
///
/// Returns `Ok(None)` when the folder holds no recognized images.
pub fn random_image<R: Rng + ?Sized>(
    folder: &Path,
    rng: &mut R,
) -> Result<Option<PathBuf>, AssetError> {
    let images = list_images(folder)?;

    let Some(picked) = choose(&images, rng) else {
        tracing::warn!("No image files found in {}", folder.display());
        return Ok(None);
    };

    tracing::info!(
        "Selected image: {}",
        picked.file_name().unwrap_or_default().to_string_lossy()
    );
    Ok(Some(picked.clone()))
}

/// Like [`random_image`], but an empty folder is an error
pub fn require_random_image<R: Rng + ?Sized>(
    folder: &Path,
    rng: &mut R,
) -> Result<PathBuf, AssetError> {
    random_image(folder, rng)?.ok_or_else(|| AssetError::NoImages {
        path: folder.to_path_buf(),
    })
}

/// One character + vehicle draw
#[derive(Debug)]
pub struct RosterDraw {
    pub size: Size,
    pub vehicle_type: VehicleType,
    pub character: Result<PathBuf, AssetError>,
    pub vehicle: Result<PathBuf, AssetError>,
}

/// Pick a size, then a character and a vehicle of that size
pub fn draw_roster<R: Rng + ?Sized>(root: &Path, rng: &mut R) -> RosterDraw {
    let size = Size::random(rng);
    let character = require_random_image(&character_dir(root, size), rng);

    let vehicle_type = VehicleType::random(rng);
    let vehicle = require_random_image(&vehicle_dir(root, vehicle_type, size), rng);

    RosterDraw {
        size,
        vehicle_type,
        character,
        vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = ["Mario", "Luigi", "Peach", "Daisy"];
        for _ in 0..50 {
            let picked = choose(&items, &mut rng).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_choose_empty_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: [u8; 0] = [];
        assert!(choose(&items, &mut rng).is_none());
    }

    #[test]
    fn test_random_image_picks_from_folder() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Mario.png"));
        touch(&dir.path().join("Luigi.png"));
        touch(&dir.path().join("sub/Hidden.png"));
        touch(&dir.path().join("thumbs.db"));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let picked = random_image(dir.path(), &mut rng).unwrap().unwrap();
            let name = picked.file_name().unwrap().to_string_lossy().to_string();
            assert!(name == "Mario.png" || name == "Luigi.png", "unexpected {name}");
        }
    }

    #[test]
    fn test_random_image_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("readme.txt"));
        let mut rng = StdRng::seed_from_u64(3);

        assert!(random_image(dir.path(), &mut rng).unwrap().is_none());
        let err = require_random_image(dir.path(), &mut rng).unwrap_err();
        assert!(matches!(err, AssetError::NoImages { .. }));
    }

    #[test]
    fn test_draw_roster_uses_matching_size() {
        let root = tempfile::tempdir().unwrap();
        let root = root.path();
        for size in Size::ALL {
            touch(&character_dir(root, size).join(format!("{}Guy.png", size)));
            for kind in VehicleType::ALL {
                touch(&vehicle_dir(root, kind, size).join(format!("{}{}.png", size, kind)));
            }
        }

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            let draw = draw_roster(root, &mut rng);
            let character = draw.character.unwrap();
            let vehicle = draw.vehicle.unwrap();
            assert_eq!(character.parent().unwrap(), character_dir(root, draw.size));
            assert_eq!(
                vehicle.parent().unwrap(),
                vehicle_dir(root, draw.vehicle_type, draw.size)
            );
        }
    }

    #[test]
    fn test_draw_roster_reports_missing_folders() {
        let root = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let draw = draw_roster(root.path(), &mut rng);
        assert!(matches!(draw.character, Err(AssetError::MissingFolder { .. })));
        assert!(matches!(draw.vehicle, Err(AssetError::MissingFolder { .. })));
    }
}
