//! Font families used by the built-in themes
//!
//! All faces are served from Google Fonts' static CDN.

use crate::typography::{FontGroup, FontWeight};

const GSTATIC: &str = "https://fonts.gstatic.com/s/";

fn group(faces: &[(FontWeight, &str, &str)]) -> FontGroup {
    faces.iter().fold(FontGroup::new(), |group, (weight, family, path)| {
        group.with_face(*weight, *family, format!("{}{}", GSTATIC, path))
    })
}

pub(crate) fn urbanist() -> FontGroup {
    group(&[
        (FontWeight::Thin, "Urbanist-Thin", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDyx8fFg.ttf"),
        (FontWeight::ExtraLight, "Urbanist-ExtraLight", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDSx4fFg.ttf"),
        (FontWeight::Light, "Urbanist-Light", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDlR4fFg.ttf"),
        (FontWeight::Regular, "Urbanist-Regular", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDyx4fFg.ttf"),
        (FontWeight::Medium, "Urbanist-Medium", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqD-R4fFg.ttf"),
        (FontWeight::SemiBold, "Urbanist-SemiBold", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDFRkfFg.ttf"),
        (FontWeight::Bold, "Urbanist-Bold", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDLBkfFg.ttf"),
        (FontWeight::ExtraBold, "Urbanist-ExtraBold", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDSxkfFg.ttf"),
        (FontWeight::Black, "Urbanist-Black", "urbanist/v18/L0xjDF02iFML4hGCyOCpRdycFsGxSrqDYhkfFg.ttf"),
    ])
}

pub(crate) fn montserrat_alternates() -> FontGroup {
    group(&[
        (FontWeight::Thin, "MontserratAlternates-Thin", "montserratalternates/v18/mFThWacfw6zH4dthXcyms1lPpC8I_b0juU0xiKfV.ttf"),
        (FontWeight::ExtraLight, "MontserratAlternates-ExtraLight", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xJIb1AA.ttf"),
        (FontWeight::Light, "MontserratAlternates-Light", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xQIX1AA.ttf"),
        (FontWeight::Regular, "MontserratAlternates-Regular", "montserratalternates/v18/mFTvWacfw6zH4dthXcyms1lPpC8I_b0juU0J7A.ttf"),
        (FontWeight::Medium, "MontserratAlternates-Medium", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xGIT1AA.ttf"),
        (FontWeight::SemiBold, "MontserratAlternates-SemiBold", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xNIP1AA.ttf"),
        (FontWeight::Bold, "MontserratAlternates-Bold", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xUIL1AA.ttf"),
        (FontWeight::ExtraBold, "MontserratAlternates-ExtraBold", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xTIH1AA.ttf"),
        (FontWeight::Black, "MontserratAlternates-Black", "montserratalternates/v18/mFTiWacfw6zH4dthXcyms1lPpC8I_b0juU0xaID1AA.ttf"),
    ])
}

pub(crate) fn jetbrains_mono() -> FontGroup {
    group(&[
        (FontWeight::Thin, "JetBrainsMono-Thin", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8yK1jPQ.ttf"),
        (FontWeight::ExtraLight, "JetBrainsMono-ExtraLight", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8SKxjPQ.ttf"),
        (FontWeight::Light, "JetBrainsMono-Light", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8lqxjPQ.ttf"),
        (FontWeight::Regular, "JetBrainsMono-Regular", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8yKxjPQ.ttf"),
        (FontWeight::Medium, "JetBrainsMono-Medium", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8-qxjPQ.ttf"),
        (FontWeight::SemiBold, "JetBrainsMono-SemiBold", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8FqtjPQ.ttf"),
        (FontWeight::Bold, "JetBrainsMono-Bold", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8L6tjPQ.ttf"),
        (FontWeight::ExtraBold, "JetBrainsMono-ExtraBold", "jetbrainsmono/v24/tDbY2o-flEEny0FZhsfKu5WU4zr3E_BX0PnT8RD8SKtjPQ.ttf"),
    ])
}

pub(crate) fn share_tech_mono() -> FontGroup {
    group(&[
        (FontWeight::Regular, "ShareTechMono", "sharetechmono/v16/J7aHnp1uDWRBEqV98dVQztYldFc7pA.ttf"),
    ])
}

pub(crate) fn advent_pro() -> FontGroup {
    group(&[
        (FontWeight::Thin, "AdventPro-Thin", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLQyJPTA.ttf"),
        (FontWeight::ExtraLight, "AdventPro-ExtraLight", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLwyNPTA.ttf"),
        (FontWeight::Light, "AdventPro-Light", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLHSNPTA.ttf"),
        (FontWeight::Regular, "AdventPro-Regular", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLQyNPTA.ttf"),
        (FontWeight::Medium, "AdventPro-Medium", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLcSNPTA.ttf"),
        (FontWeight::SemiBold, "AdventPro-SemiBold", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLnSRPTA.ttf"),
        (FontWeight::Bold, "AdventPro-Bold", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLpCRPTA.ttf"),
        (FontWeight::ExtraBold, "AdventPro-ExtraBold", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpLwyRPTA.ttf"),
        (FontWeight::Black, "AdventPro-Black", "adventpro/v33/V8mqoQfxVT4Dvddr_yOwrzaFxV7JtdQgFqXdUAQrGp_zgX5sWCpL6iRPTA.ttf"),
    ])
}

pub(crate) fn syne_mono() -> FontGroup {
    group(&[
        (FontWeight::Regular, "SyneMono", "synemono/v16/K2FzfZNHj_FHBmRbFvHzIg.ttf"),
    ])
}

pub(crate) fn nova_mono() -> FontGroup {
    group(&[
        (FontWeight::Regular, "NovaMono", "novamono/v23/Cn-0JtiGWQ5Ajb--MRKfYA.ttf"),
    ])
}

pub(crate) fn gloria_hallelujah() -> FontGroup {
    group(&[
        (FontWeight::Regular, "GloriaHallelujah", "gloriahallelujah/v24/LYjYdHv3kUk9BMV96EIswT9DIbW-MLSy.ttf"),
    ])
}

pub(crate) fn bungee_spice() -> FontGroup {
    group(&[
        (FontWeight::Regular, "BungeeSpice", "bungeespice/v15/nwpTtK2nIhxE0q-IwgSpZBqCzw.ttf"),
    ])
}

pub(crate) fn vt323() -> FontGroup {
    group(&[
        (FontWeight::Regular, "VT323", "vt323/v18/pxiKyp0ihIEF2hsY.ttf"),
    ])
}

pub(crate) fn jura() -> FontGroup {
    group(&[
        (FontWeight::Light, "Jura-Light", "jura/v34/z7NOdRfiaC4Vd8hhoPzfb5vBTP0D7auh.ttf"),
        (FontWeight::Regular, "Jura-Regular", "jura/v34/z7NOdRfiaC4Vd8hhoPzfb5vBTP1d7auh.ttf"),
        (FontWeight::Medium, "Jura-Medium", "jura/v34/z7NOdRfiaC4Vd8hhoPzfb5vBTP1v7auh.ttf"),
        (FontWeight::SemiBold, "Jura-SemiBold", "jura/v34/z7NOdRfiaC4Vd8hhoPzfb5vBTP2D6quh.ttf"),
        (FontWeight::Bold, "Jura-Bold", "jura/v34/z7NOdRfiaC4Vd8hhoPzfb5vBTP266quh.ttf"),
    ])
}

pub(crate) fn kode_mono() -> FontGroup {
    group(&[
        (FontWeight::Regular, "KodeMono-Regular", "kodemono/v4/A2BLn5pb0QgtVEPFnlYkkaoBgw4qv9odq5my9Do.ttf"),
        (FontWeight::Medium, "KodeMono-Medium", "kodemono/v4/A2BLn5pb0QgtVEPFnlYkkaoBgw4qv9odq6uy9Do.ttf"),
        (FontWeight::SemiBold, "KodeMono-SemiBold", "kodemono/v4/A2BLn5pb0QgtVEPFnlYkkaoBgw4qv9odq0e19Do.ttf"),
        (FontWeight::Bold, "KodeMono-Bold", "kodemono/v4/A2BLn5pb0QgtVEPFnlYkkaoBgw4qv9odq3619Do.ttf"),
    ])
}

pub(crate) fn roboto_mono() -> FontGroup {
    group(&[
        (FontWeight::Thin, "RobotoMono-Thin", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_3vuPQw.ttf"),
        (FontWeight::ExtraLight, "RobotoMono-ExtraLight", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_XvqPQw.ttf"),
        (FontWeight::Light, "RobotoMono-Light", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_gPqPQw.ttf"),
        (FontWeight::Regular, "RobotoMono-Regular", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_3vqPQw.ttf"),
        (FontWeight::Medium, "RobotoMono-Medium", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_7PqPQw.ttf"),
        (FontWeight::SemiBold, "RobotoMono-SemiBold", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_AP2PQw.ttf"),
        (FontWeight::Bold, "RobotoMono-Bold", "robotomono/v31/L0xuDF4xlVMF-BfR8bXMIhJHg45mwgGEFl0_Of2PQw.ttf"),
    ])
}

pub(crate) fn josefin_sans() -> FontGroup {
    group(&[
        (FontWeight::Thin, "JosefinSans-Thin", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_DjRXME.ttf"),
        (FontWeight::ExtraLight, "JosefinSans-ExtraLight", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_LjQXME.ttf"),
        (FontWeight::Light, "JosefinSans-Light", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_GbQXME.ttf"),
        (FontWeight::Regular, "JosefinSans-Regular", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_DjQXME.ttf"),
        (FontWeight::Medium, "JosefinSans-Medium", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_ArQXME.ttf"),
        (FontWeight::SemiBold, "JosefinSans-SemiBold", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_ObXXME.ttf"),
        (FontWeight::Bold, "JosefinSans-Bold", "josefinsans/v34/Qw3PZQNVED7rKGKxtqIqX5E-AVSJrOCfjY46_N_XXME.ttf"),
    ])
}

pub(crate) fn borel() -> FontGroup {
    group(&[
        (FontWeight::Regular, "Borel", "borel/v10/6qLOKZsftAPisgsh.ttf"),
    ])
}
