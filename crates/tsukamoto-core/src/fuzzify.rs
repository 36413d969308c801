//! Fuzzification: crisp metric values to Low/Medium/High membership degrees.
//!
//! Every metric uses the same piecewise-linear shape: a left shoulder for
//! Low, a triangle for Medium and a right shoulder for High. Only the
//! breakpoints differ. No range validation happens here; values outside a
//! metric's domain are still mapped by the same arithmetic.

use crate::model::{AcademicInputs, FuzzyProfile, MembershipTriple, Metric};

/// Breakpoints of one metric's membership functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Low is 1 at or below this value.
    pub low_full: f64,
    /// Low reaches 0 above this value.
    pub low_zero: f64,
    /// Medium starts rising at this value.
    pub medium_start: f64,
    /// Medium peaks at this value.
    pub medium_peak: f64,
    /// Medium reaches 0 above this value.
    pub medium_end: f64,
    /// High starts rising at this value.
    pub high_start: f64,
    /// High is 1 at or above this value.
    pub high_full: f64,
}

pub const GPA: Breakpoints = Breakpoints {
    low_full: 1.8,
    low_zero: 2.2,
    medium_start: 1.8,
    medium_peak: 2.5,
    medium_end: 3.2,
    high_start: 2.8,
    high_full: 3.2,
};

pub const CCA: Breakpoints = Breakpoints {
    low_full: 50.0,
    low_zero: 55.0,
    medium_start: 50.0,
    medium_peak: 65.0,
    medium_end: 75.0,
    high_start: 70.0,
    high_full: 80.0,
};

pub const ATTENDANCE: Breakpoints = Breakpoints {
    low_full: 0.60,
    low_zero: 0.65,
    medium_start: 0.60,
    medium_peak: 0.75,
    medium_end: 0.85,
    high_start: 0.80,
    high_full: 0.90,
};

pub const MIDTERM: Breakpoints = Breakpoints {
    low_full: 55.0,
    low_zero: 60.0,
    medium_start: 55.0,
    medium_peak: 65.0,
    medium_end: 75.0,
    high_start: 70.0,
    high_full: 80.0,
};

pub const FINAL_EXAM: Breakpoints = Breakpoints {
    low_full: 52.0,
    low_zero: 54.0,
    medium_start: 52.0,
    medium_peak: 70.0,
    medium_end: 82.0,
    high_start: 78.0,
    high_full: 82.0,
};

impl Breakpoints {
    /// Breakpoints used for a metric.
    pub fn for_metric(metric: Metric) -> &'static Breakpoints {
        match metric {
            Metric::Gpa => &GPA,
            Metric::CoreCourseAverage => &CCA,
            Metric::AttendanceRate => &ATTENDANCE,
            Metric::MidtermExamScore => &MIDTERM,
            Metric::FinalExamScore => &FINAL_EXAM,
        }
    }

    /// Membership degrees of `x`.
    pub fn membership(&self, x: f64) -> MembershipTriple {
        let mut triple = MembershipTriple::default();

        if x <= self.low_full {
            triple.low = 1.0;
        } else if x <= self.low_zero {
            triple.low = (self.low_zero - x) / (self.low_zero - self.low_full);
        }

        if x >= self.medium_start && x <= self.medium_peak {
            triple.medium = (x - self.medium_start) / (self.medium_peak - self.medium_start);
        } else if x > self.medium_peak && x <= self.medium_end {
            triple.medium = (self.medium_end - x) / (self.medium_end - self.medium_peak);
        }

        if x >= self.high_full {
            triple.high = 1.0;
        } else if x >= self.high_start {
            triple.high = (x - self.high_start) / (self.high_full - self.high_start);
        }

        triple
    }
}

pub fn fuzzify_gpa(gpa: f64) -> MembershipTriple {
    GPA.membership(gpa)
}

pub fn fuzzify_cca(cca: f64) -> MembershipTriple {
    CCA.membership(cca)
}

pub fn fuzzify_attendance(attendance: f64) -> MembershipTriple {
    ATTENDANCE.membership(attendance)
}

pub fn fuzzify_midterm(midterm: f64) -> MembershipTriple {
    MIDTERM.membership(midterm)
}

pub fn fuzzify_final_exam(final_exam: f64) -> MembershipTriple {
    FINAL_EXAM.membership(final_exam)
}

/// Fuzzify a single metric value.
pub fn fuzzify(metric: Metric, value: f64) -> MembershipTriple {
    Breakpoints::for_metric(metric).membership(value)
}

/// Fuzzify all five inputs.
pub fn fuzzify_all(inputs: &AcademicInputs) -> FuzzyProfile {
    FuzzyProfile {
        gpa: fuzzify_gpa(inputs.gpa),
        cca: fuzzify_cca(inputs.cca),
        attendance: fuzzify_attendance(inputs.attendance),
        midterm: fuzzify_midterm(inputs.midterm),
        final_exam: fuzzify_final_exam(inputs.final_exam),
    }
}
