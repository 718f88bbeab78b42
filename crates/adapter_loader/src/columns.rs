//! Column vocabulary for error sweep tables.
//!
//! Every error column pairs a Greek with a differentiation method. The
//! labels returned here are shared by the plot legends and the console
//! report so both always name a column the same way.

use std::fmt;

/// Header of the shared x-axis column.
pub const H_REL_HEADER: &str = "h_rel";

/// Option sensitivity measured by an error column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    /// First-order sensitivity to the underlying price.
    Delta,
    /// Second-order sensitivity to the underlying price.
    Gamma,
}

impl Greek {
    /// Both Greeks in plotting order (Delta panel left, Gamma panel right).
    pub const ALL: [Greek; 2] = [Greek::Delta, Greek::Gamma];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute-error column of a sweep table.
///
/// # Variants
/// - `DeltaFd`: forward finite-difference Delta (`err_D_fd`)
/// - `DeltaCs`: complex-step Delta (`err_D_cs`)
/// - `GammaFd`: forward finite-difference Gamma (`err_G_fd`)
/// - `GammaCsReal`: complex-step Gamma via the real part (`err_G_cs_real`)
/// - `GammaCs45`: complex-step Gamma via the 45-degree rotation (`err_G_cs_45`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorColumn {
    /// Finite-difference Delta error.
    DeltaFd,
    /// Complex-step Delta error.
    DeltaCs,
    /// Finite-difference Gamma error.
    GammaFd,
    /// Complex-step (real part) Gamma error.
    GammaCsReal,
    /// Complex-step (45 degree) Gamma error.
    GammaCs45,
}

impl ErrorColumn {
    /// All error columns in report order.
    pub const ALL: [ErrorColumn; 5] = [
        ErrorColumn::DeltaFd,
        ErrorColumn::DeltaCs,
        ErrorColumn::GammaFd,
        ErrorColumn::GammaCsReal,
        ErrorColumn::GammaCs45,
    ];

    /// CSV header of this column.
    pub fn header(&self) -> &'static str {
        match self {
            ErrorColumn::DeltaFd => "err_D_fd",
            ErrorColumn::DeltaCs => "err_D_cs",
            ErrorColumn::GammaFd => "err_G_fd",
            ErrorColumn::GammaCsReal => "err_G_cs_real",
            ErrorColumn::GammaCs45 => "err_G_cs_45",
        }
    }

    /// Greek this column measures.
    pub fn greek(&self) -> Greek {
        match self {
            ErrorColumn::DeltaFd | ErrorColumn::DeltaCs => Greek::Delta,
            ErrorColumn::GammaFd | ErrorColumn::GammaCsReal | ErrorColumn::GammaCs45 => {
                Greek::Gamma
            }
        }
    }

    /// Short method label, e.g. `CS (real)`.
    pub fn method_label(&self) -> &'static str {
        match self {
            ErrorColumn::DeltaFd | ErrorColumn::GammaFd => "FD",
            ErrorColumn::DeltaCs => "CS",
            ErrorColumn::GammaCsReal => "CS (real)",
            ErrorColumn::GammaCs45 => "CS (45°)",
        }
    }

    /// Legend label used in the error plots, e.g. `CS Gamma (real)`.
    pub fn legend_label(&self) -> &'static str {
        match self {
            ErrorColumn::DeltaFd => "FD Delta",
            ErrorColumn::DeltaCs => "CS Delta",
            ErrorColumn::GammaFd => "FD Gamma",
            ErrorColumn::GammaCsReal => "CS Gamma (real)",
            ErrorColumn::GammaCs45 => "CS Gamma (45°)",
        }
    }

    /// Label used in the best-accuracy section, e.g. `Gamma CS-real`.
    pub fn accuracy_label(&self) -> &'static str {
        match self {
            ErrorColumn::DeltaFd => "Delta FD",
            ErrorColumn::DeltaCs => "Delta CS",
            ErrorColumn::GammaFd => "Gamma FD",
            ErrorColumn::GammaCsReal => "Gamma CS-real",
            ErrorColumn::GammaCs45 => "Gamma CS-45°",
        }
    }

    /// Columns measuring `greek`, in report order.
    pub fn for_greek(greek: Greek) -> impl Iterator<Item = ErrorColumn> {
        Self::ALL.into_iter().filter(move |c| c.greek() == greek)
    }
}

impl fmt::Display for ErrorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_unique() {
        let mut headers: Vec<&str> = ErrorColumn::ALL.iter().map(|c| c.header()).collect();
        headers.push(H_REL_HEADER);
        let count = headers.len();
        headers.sort_unstable();
        headers.dedup();
        assert_eq!(headers.len(), count);
    }

    #[test]
    fn test_for_greek_partitions_columns() {
        let delta: Vec<_> = ErrorColumn::for_greek(Greek::Delta).collect();
        let gamma: Vec<_> = ErrorColumn::for_greek(Greek::Gamma).collect();

        assert_eq!(delta, vec![ErrorColumn::DeltaFd, ErrorColumn::DeltaCs]);
        assert_eq!(
            gamma,
            vec![
                ErrorColumn::GammaFd,
                ErrorColumn::GammaCsReal,
                ErrorColumn::GammaCs45
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ErrorColumn::GammaCs45.method_label(), "CS (45°)");
        assert_eq!(ErrorColumn::GammaCsReal.legend_label(), "CS Gamma (real)");
        assert_eq!(ErrorColumn::GammaCsReal.accuracy_label(), "Gamma CS-real");
        assert_eq!(format!("{}", ErrorColumn::DeltaCs), "err_D_cs");
        assert_eq!(format!("{}", Greek::Gamma), "Gamma");
    }
}
