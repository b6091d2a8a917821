// Kernel version model and era predicates.
//
// This file is compiled twice: as `kshim_compat::version`, and via
// `include!` from the build scripts, which is how they and the library are
// guaranteed to agree on thresholds. Keep it free of dependencies and free
// of inner attributes (include! rejects them).

/// A kernel release triple. Ordering is lexicographic over
/// (major, minor, patch), which matches how release numbers compare.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KernelVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl KernelVersion {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The `KERNEL_VERSION(a, b, c)` packing from linux/version.h.
    /// Patch levels above 255 saturate, as upstream does since 4.19.222.
    pub const fn code(self) -> u32 {
        let patch = if self.patch > 255 { 255 } else { self.patch };
        ((self.major as u32) << 16) | ((self.minor as u32) << 8) | patch as u32
    }

    /// Parse a release string such as `5.15.0` or `6.8.0-41-generic`.
    /// Everything from the first character outside `[0-9.]` is ignored.
    pub fn parse(release: &str) -> Option<Self> {
        let numeric = release
            .split(|c: char| !c.is_ascii_digit() && c != '.')
            .next()?;
        let mut parts = numeric.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some("") | None => 0,
            Some(p) => p.parse().ok()?,
        };
        Some(Self::new(major, minor, patch))
    }
}

/// Oldest kernel the facade supports.
pub const MIN_SUPPORTED: KernelVersion = KernelVersion::new(3, 10, 0);

/// First kernel the facade does not support.
pub const MAX_SUPPORTED_EXCLUSIVE: KernelVersion = KernelVersion::new(7, 0, 0);

/// `access_ok` stops consulting its mode argument; the exported signature
/// drops it and a fixed 0 is synthesized for the underlying form.
pub const ACCESS_OK_MODE_IGNORED: KernelVersion = KernelVersion::new(4, 0, 0);

/// `access_ok` loses the mode parameter entirely (commit 96d4f267e40f).
pub const ACCESS_OK_TWO_ARG: KernelVersion = KernelVersion::new(5, 0, 0);

/// The logging entry point is renamed `printk` -> `_printk`
/// (printk-index work, v5.15).
pub const PRINTK_RENAMED: KernelVersion = KernelVersion::new(5, 15, 0);

pub fn supported(v: KernelVersion) -> bool {
    v >= MIN_SUPPORTED && v < MAX_SUPPORTED_EXCLUSIVE
}

/// Which form of the user-range check a given kernel carries.
///
/// The three eras partition the supported range; `build.rs` turns the
/// selected era into exactly one `kshim_access_ok_*` cfg.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessOkEra {
    /// Below 4.0.0: mode is semantically consulted; the exported signature
    /// carries it and it is forwarded verbatim.
    ExplicitMode,
    /// [4.0.0, 5.0.0): the underlying form still takes three arguments but
    /// ignores the mode; the export drops it and 0 is passed internally.
    SynthesizedMode,
    /// From 5.0.0: two-argument form on both sides.
    TwoArg,
}

pub fn access_ok_era(v: KernelVersion) -> AccessOkEra {
    if v < ACCESS_OK_MODE_IGNORED {
        AccessOkEra::ExplicitMode
    } else if v < ACCESS_OK_TWO_ARG {
        AccessOkEra::SynthesizedMode
    } else {
        AccessOkEra::TwoArg
    }
}

/// Which symbol the kernel exports for its logging entry point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrintkSymbol {
    Printk,
    UnderscorePrintk,
}

pub fn printk_symbol(v: KernelVersion) -> PrintkSymbol {
    if v < PRINTK_RENAMED {
        PrintkSymbol::Printk
    } else {
        PrintkSymbol::UnderscorePrintk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const fn v(major: u16, minor: u16, patch: u16) -> KernelVersion {
        KernelVersion::new(major, minor, patch)
    }

    #[test]
    fn test_version_code_packing() {
        assert_eq!(v(5, 0, 0).code(), 0x050000);
        assert_eq!(v(5, 15, 0).code(), 0x050f00);
        assert_eq!(v(4, 19, 3).code(), 0x041303);
    }

    #[test]
    fn test_version_code_saturates_patch() {
        assert_eq!(v(4, 19, 222).code(), v(4, 19, 255).code());
        assert_eq!(v(4, 19, 300).code() & 0xff, 255);
    }

    #[test]
    fn test_parse_plain_triple() {
        assert_eq!(KernelVersion::parse("5.15.0"), Some(v(5, 15, 0)));
        assert_eq!(KernelVersion::parse("3.10.108"), Some(v(3, 10, 108)));
    }

    #[test]
    fn test_parse_distro_release_strings() {
        assert_eq!(KernelVersion::parse("6.8.0-41-generic"), Some(v(6, 8, 0)));
        assert_eq!(KernelVersion::parse("5.14.0-362.el9.x86_64"), Some(v(5, 14, 0)));
        assert_eq!(KernelVersion::parse("4.9-rc2"), Some(v(4, 9, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(KernelVersion::parse("fred"), None);
        assert_eq!(KernelVersion::parse(""), None);
        assert_eq!(KernelVersion::parse("5"), None);
    }

    #[test]
    fn test_supported_range_boundaries() {
        assert!(!supported(v(3, 9, 255)));
        assert!(supported(v(3, 10, 0)));
        assert!(supported(v(6, 99, 0)));
        assert!(!supported(v(7, 0, 0)));
    }

    // Era selection immediately below and above each documented threshold.

    #[test]
    fn test_access_ok_era_boundaries() {
        assert_eq!(access_ok_era(v(3, 19, 255)), AccessOkEra::ExplicitMode);
        assert_eq!(access_ok_era(v(4, 0, 0)), AccessOkEra::SynthesizedMode);
        assert_eq!(access_ok_era(v(4, 20, 255)), AccessOkEra::SynthesizedMode);
        assert_eq!(access_ok_era(v(5, 0, 0)), AccessOkEra::TwoArg);
        assert_eq!(access_ok_era(v(6, 8, 0)), AccessOkEra::TwoArg);
    }

    #[test]
    fn test_printk_symbol_boundaries() {
        assert_eq!(printk_symbol(v(5, 14, 255)), PrintkSymbol::Printk);
        assert_eq!(printk_symbol(v(5, 15, 0)), PrintkSymbol::UnderscorePrintk);
    }

    proptest! {
        // Era predicates are total over the supported range and respect the
        // threshold ordering, so they partition it with no gap or overlap.
        #[test]
        fn prop_eras_partition_supported_range(
            major in 3u16..=6,
            minor in 0u16..=99,
            patch in 0u16..=255,
        ) {
            let ver = v(major, minor, patch);
            prop_assume!(supported(ver));

            let era = access_ok_era(ver);
            prop_assert_eq!(ver < ACCESS_OK_MODE_IGNORED, era == AccessOkEra::ExplicitMode);
            prop_assert_eq!(
                ver >= ACCESS_OK_MODE_IGNORED && ver < ACCESS_OK_TWO_ARG,
                era == AccessOkEra::SynthesizedMode
            );
            prop_assert_eq!(ver >= ACCESS_OK_TWO_ARG, era == AccessOkEra::TwoArg);

            prop_assert_eq!(
                printk_symbol(ver) == PrintkSymbol::Printk,
                ver < PRINTK_RENAMED
            );
        }

        #[test]
        fn prop_ordering_matches_version_code(
            a in (3u16..=6, 0u16..=99, 0u16..=255),
            b in (3u16..=6, 0u16..=99, 0u16..=255),
        ) {
            let (va, vb) = (v(a.0, a.1, a.2), v(b.0, b.1, b.2));
            prop_assume!(va.patch <= 255 && vb.patch <= 255);
            prop_assert_eq!(va.cmp(&vb), va.code().cmp(&vb.code()));
        }
    }
}
