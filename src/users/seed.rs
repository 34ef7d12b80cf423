use super::dto::UserRecord;

struct SeedUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    status: &'static str,
    last_login: &'static str,
}

const SEED_USERS: [SeedUser; 6] = [
    SeedUser {
        id: "u-101",
        name: "Aarav Patel",
        email: "aarav@starter.com",
        role: "Frontend Engineer",
        status: "Active",
        last_login: "2026-02-26 10:12",
    },
    SeedUser {
        id: "u-102",
        name: "Meera Iyer",
        email: "meera@starter.com",
        role: "UI Designer",
        status: "Active",
        last_login: "2026-02-26 09:01",
    },
    SeedUser {
        id: "u-103",
        name: "Kabir Khan",
        email: "kabir@starter.com",
        role: "QA Engineer",
        status: "Pending",
        last_login: "2026-02-24 17:40",
    },
    SeedUser {
        id: "u-104",
        name: "Isha Verma",
        email: "isha@starter.com",
        role: "Backend Engineer",
        status: "Inactive",
        last_login: "2026-02-18 12:22",
    },
    SeedUser {
        id: "u-105",
        name: "Neel Sharma",
        email: "neel@starter.com",
        role: "Product Manager",
        status: "Active",
        last_login: "2026-02-26 08:32",
    },
    SeedUser {
        id: "u-106",
        name: "Anaya Singh",
        email: "anaya@starter.com",
        role: "DevOps Engineer",
        status: "Pending",
        last_login: "2026-02-25 20:15",
    },
];

/// Baseline rows inserted when the table is first seen empty.
pub fn seed_users() -> Vec<UserRecord> {
    SEED_USERS
        .iter()
        .map(|u| UserRecord {
            id: u.id.into(),
            name: u.name.into(),
            email: u.email.into(),
            role: u.role.into(),
            status: u.status.into(),
            last_login: u.last_login.into(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::dto::UserStatus;
    use std::collections::HashSet;

    #[test]
    fn seed_rows_satisfy_record_invariants() {
        let rows = seed_users();
        assert_eq!(rows.len(), 6);

        let emails: HashSet<_> = rows.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails.len(), rows.len());

        for row in &rows {
            assert_eq!(row.email, row.email.to_lowercase());
            assert!(row.status.parse::<UserStatus>().is_ok());
            assert_eq!(row.last_login.len(), "YYYY-MM-DD HH:MM".len());
        }
    }
}
