use super::*;

/// Tests which roles each permission admits.
///
/// Expected: admin holds everything, finance only payments, reviewer only document
/// review, viewer nothing
#[test]
fn permissions_follow_role_matrix() {
    let cases = [
        (UserRole::Admin, [true, true, true]),
        (UserRole::Finance, [false, true, false]),
        (UserRole::Reviewer, [false, false, true]),
        (UserRole::Viewer, [false, false, false]),
    ];

    for (role, expected) in cases {
        let actual = [
            Permission::Admin.allows(role),
            Permission::ManagePayments.allows(role),
            Permission::ReviewDocuments.allows(role),
        ];
        assert_eq!(actual, expected, "role {}", role.as_str());
    }
}
