use crate::Lens;

mod view_set;


#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Address {
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct User {
    pub name: String,
    pub address: Address,
}

pub(crate) fn alice() -> User {
    User {
        name: "Alice".to_string(),
        address: Address {
            city: "Wonderland".to_string(),
            zip: "12345".to_string(),
        },
    }
}

pub(crate) fn name_lens() -> Lens<User, String> {
    Lens::labeled(
        "name",
        |user: &User| user.name.clone(),
        |name, user: &User| User {
            name,
            ..user.clone()
        },
    )
}

pub(crate) fn city_lens() -> Lens<User, String> {
    Lens::labeled(
        "address.city",
        |user: &User| user.address.city.clone(),
        |city, user: &User| User {
            address: Address {
                city,
                ..user.address.clone()
            },
            ..user.clone()
        },
    )
}
