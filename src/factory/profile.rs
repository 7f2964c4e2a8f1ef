use chrono::{DateTime, Utc};
use fake::{
    faker::{
        address::en::CountryName, chrono::en::DateTimeBetween, company::en::CompanyName,
        internet::en::SafeEmail, lorem::en::Word, name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Dummy, Fake, Faker,
};
use serde::Deserialize;

use crate::{
    model::profile::{Birthday, Profile, ProfileRole},
    repository::profile::ProfileStorage,
};

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &Profile, ext: T) -> Profile,
    modifier_many: fn(x: &Profile, idx: usize, ext: T) -> Profile,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Profile, ext: T) -> Profile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Profile, idx: usize, ext: T) -> Profile) {
        self.modifier_many = modifier
    }

    /// Builds one profile and saves it as the stored record.
    pub fn generate_one(&mut self, storage: &dyn ProfileStorage, ext: T) -> anyhow::Result<Profile> {
        let data = ProfileDummy::new();
        let data = data.generate_one();
        let data = (self.modifier_one)(&data, ext);
        storage.save(&data)?;
        Ok(data)
    }

    /// Builds `num` profiles without storing them; storage only holds one.
    pub fn generate_many(&mut self, num: u32, ext: T) -> Vec<Profile> {
        let data = ProfileDummy::new();
        let data = data.generate_many(num);
        let mut result: Vec<Profile> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        result
    }
}

#[derive(Debug, Deserialize, Dummy, Clone)]
struct ProfileDummy {
    #[dummy(faker = "Name()")]
    pub name: String,
    #[dummy(faker = "CompanyName()")]
    pub venture: String,
    #[dummy(faker = "CountryName()")]
    pub country: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "PhoneNumber()")]
    pub phone: String,
    #[dummy(faker = "Word()")]
    pub favorite_color: String,
    #[dummy(faker = "0..3")]
    pub role_idx: usize,
    pub with_venture: bool,
}

impl ProfileDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn to_profile(dummy: ProfileDummy) -> Profile {
        let birthday = DateTimeBetween(DateTime::UNIX_EPOCH, Utc::now()).fake::<DateTime<Utc>>();
        Profile {
            name: dummy.name,
            birthday: Birthday::Text(birthday.format("%Y-%m-%d").to_string()),
            role: ProfileRole::ALL.get(dummy.role_idx).copied(),
            venture: dummy.with_venture.then_some(dummy.venture),
            country: dummy.country,
            email: dummy.email,
            phone: dummy.phone,
            favorite_color: dummy.favorite_color,
        }
    }

    pub fn generate_one(&self) -> Profile {
        Self::to_profile(self.clone())
    }

    pub fn generate_many(&self, num: u32) -> Vec<Profile> {
        let mut result: Vec<Profile> = vec![];
        for _ in 0..num {
            result.push(Self::to_profile(Faker.fake::<Self>()));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::{
        core::validation::validate_profile,
        factory::profile::ProfileFactory,
        model::profile::Profile,
        repository::profile::{FileProfileStorage, ProfileStorage},
    };

    #[test]
    fn test_generate_one() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let storage = FileProfileStorage::new(dir.path().join(".profile.json"));
        let mut factory = ProfileFactory::<()>::new();
        let data = factory.generate_one(&storage, ())?;
        assert_eq!(storage.get()?, Some(data));
        Ok(())
    }

    #[test]
    fn test_generate_one_modified() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let storage = FileProfileStorage::new(dir.path().join(".profile.json"));
        let mut factory = ProfileFactory::<String>::new();
        factory.modified_one(|data, ext| Profile {
            name: ext,
            ..data.clone()
        });
        factory.generate_one(&storage, "Ada".to_string())?;
        assert_eq!(storage.get()?.map(|x| x.name), Some("Ada".to_string()));
        Ok(())
    }

    #[test]
    fn test_generate_many_passes_validation() -> anyhow::Result<()> {
        let mut factory = ProfileFactory::<()>::new();
        let data = factory.generate_many(20, ());
        assert_eq!(data.len(), 20);
        for item in data {
            let body = serde_json::to_value(&item)?;
            assert_eq!(validate_profile(&body), Ok(item));
        }
        Ok(())
    }
}
