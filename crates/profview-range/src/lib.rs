// Dweve profview - Profile Explorer View State
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Date-time ranges for profile queries.
//!
//! The date-range picker offers relative ranges ("last 15 minutes") and
//! absolute ranges. Either kind is stored in the query string as a range
//! key alongside the resolved millisecond bounds.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use profview_range::{DateTimeRange, RelativeUnit};
//!
//! let range = DateTimeRange::from_range_key("relative:minute|15")?;
//! assert_eq!(range, DateTimeRange::relative(RelativeUnit::Minute, 15));
//!
//! let now = Utc::now();
//! assert_eq!(range.to_ms(now) - range.from_ms(now), 15 * 60_000);
//! # Ok::<(), profview_range::RangeError>(())
//! ```

mod date;
mod error;
mod picker;
mod range;

pub use date::{AbsoluteDate, RangeDate, RelativeDate, RelativeUnit};
pub use error::{RangeError, RangeResult};
pub use picker::AbsolutePickerState;
pub use range::{date_hours_ago, format_range_label, DateTimeRange};
