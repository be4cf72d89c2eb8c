// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling: Response type

/// Response from the [`EventDispatcher`](crate::graph::EventDispatcher)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Response {
    /// Event was unused
    ///
    /// The host may pass unused events to other UI code.
    Unused,
    /// Event was swallowed by a handler
    Used,
}

impl Response {
    /// `Used` if `swallowed`, otherwise `Unused`
    #[inline]
    pub fn used_if(swallowed: bool) -> Self {
        if swallowed {
            Response::Used
        } else {
            Response::Unused
        }
    }

    /// True if variant is `Used`
    #[inline]
    pub fn is_used(&self) -> bool {
        matches!(self, Response::Used)
    }

    /// True if variant is `Unused`
    #[inline]
    pub fn is_unused(&self) -> bool {
        matches!(self, Response::Unused)
    }
}

impl std::ops::BitOr for Response {
    type Output = Self;

    /// Used if either input is used
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Response::used_if(self.is_used() || rhs.is_used())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn combine() {
        assert_eq!(Response::Unused | Response::Used, Response::Used);
        assert_eq!(Response::Unused | Response::Unused, Response::Unused);
        assert!(Response::used_if(true).is_used());
    }
}
