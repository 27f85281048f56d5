// src/application/identity.rs
// Fake identity generation for synthesized customers

use fake::faker::address::en::{CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::models::{Address, Customer};

/// Realistic name/address field source. Street numbers are not part of
/// this capability; they are assembled by [`generate_address`].
pub trait IdentityGenerator: Send {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn street_name(&mut self) -> String;
    fn city(&mut self) -> String;
    fn state_abbr(&mut self) -> String;
    fn zipcode(&mut self) -> String;
}

#[derive(Debug, Clone)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

pub fn generate_person(identity: &mut dyn IdentityGenerator) -> PersonName {
    PersonName {
        first_name: identity.first_name(),
        last_name: identity.last_name(),
    }
}

/// Compose a full address in the Ledger API shape, adding a street number
/// drawn uniformly from [1, 9999].
pub fn generate_address<R: Rng>(identity: &mut dyn IdentityGenerator, rng: &mut R) -> Address {
    Address {
        street_number: rng.gen_range(1..=9999).to_string(),
        street_name: identity.street_name(),
        city: identity.city(),
        state: identity.state_abbr(),
        zip: identity.zipcode(),
    }
}

pub fn generate_customer<R: Rng>(identity: &mut dyn IdentityGenerator, rng: &mut R) -> Customer {
    let person = generate_person(identity);
    Customer {
        first_name: person.first_name,
        last_name: person.last_name,
        address: generate_address(identity, rng),
    }
}

/// [`IdentityGenerator`] backed by the `fake` crate's US-English fakers.
pub struct FakerIdentity {
    rng: StdRng,
}

impl FakerIdentity {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible output in tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FakerIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityGenerator for FakerIdentity {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn street_name(&mut self) -> String {
        StreetName().fake_with_rng(&mut self.rng)
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    fn state_abbr(&mut self) -> String {
        StateAbbr().fake_with_rng(&mut self.rng)
    }

    fn zipcode(&mut self) -> String {
        ZipCode().fake_with_rng(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn generated_customer_has_all_address_fields() {
        let mut identity = FakerIdentity::seeded(11);
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let customer = generate_customer(&mut identity, &mut rng);

        assert!(!customer.first_name.is_empty());
        assert!(!customer.last_name.is_empty());
        assert!(!customer.address.street_name.is_empty());
        assert!(!customer.address.city.is_empty());
        assert_eq!(customer.address.state.len(), 2);
        assert!(!customer.address.zip.is_empty());
    }

    #[test]
    fn street_number_stays_in_range() {
        let mut identity = FakerIdentity::seeded(3);
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        for _ in 0..100 {
            let address = generate_address(&mut identity, &mut rng);
            let n: u32 = address.street_number.parse().unwrap();
            assert!((1..=9999).contains(&n));
        }
    }
}
