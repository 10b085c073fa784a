// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use phonenumber::{Mode, PhoneNumber};

/// Returns the E.164 digits of the number without the leading '+', i.e.
/// country calling code followed by the national significant number.
///
/// This is the key prefix data files are matched against.
pub fn e164_digits(phone_number: &PhoneNumber) -> String {
    phone_number
        .format()
        .mode(Mode::E164)
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Country calling code as decimal text, e.g. `"213"`.
pub fn country_calling_code(phone_number: &PhoneNumber) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(phone_number.code().value()).to_owned()
}
