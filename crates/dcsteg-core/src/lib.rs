//! # DCSteg Core API
//!
//! Hides a text message in the DC coefficients of the 8×8 DCT blocks of an
//! image's luma plane. Each message byte is protected by a Hamming(7,4) code,
//! so a single flipped bit per codeword is repaired when unveiling.
//!
//! The entry points live in [`api`], one builder per operation:
//! - [`api::analyze`] tells how many bytes fit into an image per bit order
//! - [`api::hide`] writes a message into an image and saves it as PNG
//! - [`api::unveil`] reads a message back
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use dcsteg_core::media::{Persist, RgbImage};
//! use dcsteg_core::{BitOrder, CodecOptions};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbImage::from_fn(96, 96, |_, _| [99, 99, 99])
//!     .save_as(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! dcsteg_core::api::hide::prepare()
//!     .with_message("Hello")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-secret.png"))
//!     .with_options(CodecOptions::from(BitOrder::new(1).unwrap()))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust,no_run
//! use dcsteg_core::{BitOrder, CodecOptions};
//!
//! let message = dcsteg_core::api::unveil::prepare()
//!     .from_secret_file("image-with-secret.png")
//!     .with_options(CodecOptions::from(BitOrder::new(1).unwrap()))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! println!("{}", String::from_utf8_lossy(&message));
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
// clippy::cargo_common_metadata,
// clippy::branches_sharing_code,
// clippy::cast_lossless,
// clippy::cognitive_complexity,
// clippy::get_unwrap,
// clippy::if_then_some_else_none,
// clippy::inefficient_to_string,
// clippy::match_bool,
// clippy::missing_const_for_fn,
// clippy::missing_panics_doc,
// clippy::option_if_let_else,
// clippy::redundant_closure,
    clippy::redundant_else,
// clippy::redundant_pub_crate,
// clippy::ref_binding_to_reference,
// clippy::ref_option_ref,
// clippy::same_functions_in_if_condition,
// clippy::unneeded_field_pattern,
// clippy::unnested_or_patterns,
// clippy::use_self,
)]

pub mod analysis;
pub mod api;
pub mod bit_sequence;
pub mod codec;
pub mod commands;
pub mod error;
pub mod hamming;
pub mod media;
pub mod result;

pub use crate::analysis::{CapacityReport, OrderCapacity};
pub use crate::bit_sequence::CountedBitSequence;
pub use crate::error::DcStegError;
pub use crate::media::{BitOrder, CodecOptions, ImprintStats};
pub use crate::result::Result;

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::commands::{analyze, hide, unveil};
    use crate::media::{Persist, RgbImage};
    use crate::test_utils::{
        prepare_block_image, prepare_gradient_image, prepare_message, prepare_textured_image,
        ELIGIBLE_GRAY,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn save(mut img: RgbImage, file: &Path) {
        img.save_as(file).expect("carrier was not written.");
    }

    #[test]
    fn should_hide_and_unveil_a_message_at_every_usable_order() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        save(prepare_block_image(96, 96, |_, _| ELIGIBLE_GRAY), &carrier);

        for order in BitOrder::USABLE {
            let secret = out_dir.path().join(format!("secret-{order}.png"));
            let options = CodecOptions::from(order);

            hide(&carrier, &secret, b"hi", options)?;
            assert_file_not_empty(&secret);
            assert_eq!(unveil(&secret, options)?, b"hi".to_vec(), "order {order}");
        }

        Ok(())
    }

    #[test]
    fn should_keep_the_analysis_in_line_with_hiding() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        let secret = out_dir.path().join("secret.png");
        save(prepare_block_image(112, 72, |_, _| ELIGIBLE_GRAY), &carrier);

        let report = analyze(&carrier)?;
        let order = BitOrder::default();
        assert_eq!(report.bytes(order), 5);

        hide(&carrier, &secret, b"fits!", CodecOptions::from(order))?;
        assert_eq!(unveil(&secret, CodecOptions::from(order))?, b"fits!".to_vec());

        let result = hide(&carrier, &secret, b"too long", CodecOptions::from(order));
        assert!(result.unwrap_err().is_end_of_medium());

        Ok(())
    }

    #[test]
    fn should_unveil_nothing_from_a_plain_mid_gray_image() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("gray.png");
        save(prepare_block_image(64, 64, |_, _| 128), &carrier);

        assert!(analyze(&carrier)?.iter().next().is_none());
        assert_eq!(unveil(&carrier, CodecOptions::default())?, Vec::<u8>::new());

        Ok(())
    }

    #[test]
    fn should_leave_the_margins_of_odd_sized_images_intact() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("carrier.png");
        let secret = out_dir.path().join("secret.png");
        let img = prepare_block_image(101, 99, |_, _| ELIGIBLE_GRAY);
        save(img.clone(), &carrier);

        hide(&carrier, &secret, b"x", CodecOptions::default())?;
        let loaded = RgbImage::open(&secret)?;

        for row in 0..99 {
            for col in 0..101 {
                if row >= 96 || col >= 96 {
                    let i = row * 101 + col;
                    assert_eq!(loaded.pixel(i), img.pixel(i), "margin ({row},{col})");
                }
            }
        }
        assert_eq!(unveil(&secret, CodecOptions::default())?, b"x".to_vec());

        Ok(())
    }

    #[test]
    fn should_fail_for_invalid_carrier_image_file() {
        let out_dir = TempDir::new().unwrap();
        let result = hide(
            Path::new("some_random_file.png"),
            &out_dir.path().join("out.png"),
            b"hi",
            CodecOptions::default(),
        );

        match result.err() {
            Some(DcStegError::InvalidImageMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_reject_images_smaller_than_a_block() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("gradient.png");
        save(prepare_gradient_image(7, 7), &carrier);

        let result = hide(
            &carrier,
            &out_dir.path().join("out.png"),
            b"",
            CodecOptions::default(),
        );
        assert!(matches!(
            result,
            Err(DcStegError::EndOfMedium { consumed: 0 })
        ));
        assert!(!out_dir.path().join("out.png").exists());

        Ok(())
    }

    #[test]
    fn should_fill_a_textured_image_to_its_capacity() -> Result<()> {
        let out_dir = TempDir::new()?;

        for seed in 0..2 {
            let carrier = out_dir.path().join(format!("textured-{seed}.png"));
            save(prepare_textured_image(128, 128, seed), &carrier);
            let report = analyze(&carrier)?;

            for order in BitOrder::USABLE {
                let capacity = report.bytes(order);
                assert!(capacity > 0, "seed {seed}, order {order}");
                let message = prepare_message(capacity as usize);
                let secret = out_dir.path().join(format!("secret-{seed}-{order}.png"));

                hide(&carrier, &secret, &message, CodecOptions::from(order))?;
                assert_eq!(
                    unveil(&secret, CodecOptions::from(order))?,
                    message,
                    "seed {seed}, order {order}"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn should_refuse_one_byte_more_than_a_textured_image_holds() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = out_dir.path().join("textured.png");
        save(prepare_textured_image(128, 128, 3), &carrier);
        let report = analyze(&carrier)?;

        for order in BitOrder::USABLE {
            let secret = out_dir.path().join(format!("secret-{order}.png"));
            let message = prepare_message(report.bytes(order) as usize + 1);

            let result = hide(&carrier, &secret, &message, CodecOptions::from(order));
            assert!(result.unwrap_err().is_end_of_medium(), "order {order}");
            assert!(!secret.exists());
        }

        Ok(())
    }

    fn assert_file_not_empty(image_with_secret: &Path) {
        let l = fs::metadata(image_with_secret)
            .expect("image was not written.")
            .len();
        assert!(l > 0, "File is not supposed to be empty");
    }
}
