#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::error::AirdropError;
    use crate::state::Airdrop;
    use anchor_lang::prelude::*;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(e) => {
                panic!("expected an airdrop error, got {:?}", e)
            }
        }
    }

    fn users(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    fn registry(claim_amount: u64) -> Airdrop {
        Airdrop {
            version: AIRDROP_VERSION,
            claim_amount,
            ..Airdrop::default()
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let airdrop = registry(1_000_000);
        assert_eq!(airdrop.user_count, 0);
        assert!(airdrop.users().is_empty());
        assert!(!airdrop.is_full());
        assert!(airdrop.user_list.iter().all(|slot| *slot == Pubkey::default()));
    }

    #[test]
    fn test_add_user_appends_in_order() {
        let mut airdrop = registry(1_000_000);
        let members = users(3);

        for (expected, user) in members.iter().enumerate() {
            let index = airdrop.add_user(*user).unwrap();
            assert_eq!(index, expected);
        }

        assert_eq!(airdrop.users(), members.as_slice());
        assert_eq!(airdrop.user_count, 3);
    }

    #[test]
    fn test_add_user_rejects_when_full() {
        let mut airdrop = registry(1_000_000);
        for user in users(MAX_NUM_USERS) {
            airdrop.add_user(user).unwrap();
        }
        assert!(airdrop.is_full());

        let before = airdrop.user_list;
        let err = airdrop.add_user(Pubkey::new_unique()).unwrap_err();

        assert_eq!(error_code(err), 300);
        assert_eq!(airdrop.user_count as usize, MAX_NUM_USERS);
        assert_eq!(airdrop.user_list, before);
    }

    #[test]
    fn test_add_user_rejects_duplicate() {
        let mut airdrop = registry(1_000_000);
        let user = Pubkey::new_unique();
        airdrop.add_user(user).unwrap();

        let err = airdrop.add_user(user).unwrap_err();

        assert_eq!(error_code(err), u32::from(AirdropError::UserAlreadyInUserlist));
        assert_eq!(airdrop.users(), &[user]);
    }

    #[test]
    fn test_full_check_runs_before_duplicate_check() {
        let mut airdrop = registry(1_000_000);
        let members = users(MAX_NUM_USERS);
        for user in &members {
            airdrop.add_user(*user).unwrap();
        }

        let err = airdrop.add_user(members[0]).unwrap_err();
        assert_eq!(error_code(err), u32::from(AirdropError::UserListFull));
    }

    #[test]
    fn test_remove_user_shifts_tail_left() {
        let mut airdrop = registry(1_000_000);
        let members = users(4);
        for user in &members {
            airdrop.add_user(*user).unwrap();
        }

        let index = airdrop.remove_user(&members[1]).unwrap();

        assert_eq!(index, 1);
        assert_eq!(airdrop.users(), &[members[0], members[2], members[3]]);
        assert_eq!(airdrop.user_list[3], Pubkey::default());
        assert!(!airdrop.contains(&members[1]));
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut airdrop = registry(1_000_000);
        let members = users(3);
        for user in &members {
            airdrop.add_user(*user).unwrap();
        }

        assert_eq!(airdrop.remove_user(&members[0]).unwrap(), 0);
        assert_eq!(airdrop.users(), &[members[1], members[2]]);

        assert_eq!(airdrop.remove_user(&members[2]).unwrap(), 1);
        assert_eq!(airdrop.users(), &[members[1]]);

        assert_eq!(airdrop.remove_user(&members[1]).unwrap(), 0);
        assert!(airdrop.users().is_empty());
        assert!(airdrop.user_list.iter().all(|slot| *slot == Pubkey::default()));
    }

    #[test]
    fn test_remove_non_member_leaves_list_untouched() {
        let mut airdrop = registry(1_000_000);
        let members = users(2);
        for user in &members {
            airdrop.add_user(*user).unwrap();
        }
        let before = airdrop.clone();

        let err = airdrop.remove_user(&Pubkey::new_unique()).unwrap_err();

        assert_eq!(error_code(err), u32::from(AirdropError::UserNotInUserlist));
        assert_eq!(airdrop.user_count, before.user_count);
        assert_eq!(airdrop.user_list, before.user_list);
    }

    #[test]
    fn test_default_key_is_not_a_member() {
        // Empty slots hold Pubkey::default(); they must not count as members.
        let mut airdrop = registry(1_000_000);
        airdrop.add_user(Pubkey::new_unique()).unwrap();

        assert!(!airdrop.contains(&Pubkey::default()));
        assert!(airdrop.remove_user(&Pubkey::default()).is_err());
    }

    #[test]
    fn test_leave_then_join_at_capacity() {
        let mut airdrop = registry(1_000_000);
        let members = users(MAX_NUM_USERS);
        for user in &members {
            airdrop.add_user(*user).unwrap();
        }

        airdrop.remove_user(&members[5]).unwrap();
        let newcomer = Pubkey::new_unique();
        let index = airdrop.add_user(newcomer).unwrap();

        assert_eq!(index, MAX_NUM_USERS - 1);
        assert_eq!(airdrop.user_count as usize, MAX_NUM_USERS);
        assert_eq!(airdrop.users().last(), Some(&newcomer));
        assert!(!airdrop.contains(&members[5]));
    }

    #[test]
    fn test_distribution_share() {
        let mut airdrop = registry(1_000_000);
        for user in users(MAX_NUM_USERS) {
            airdrop.add_user(user).unwrap();
        }

        let (share, remainder) = airdrop.distribution_share().unwrap();
        assert_eq!(share, 90_909);
        assert_eq!(remainder, 1);
        assert_eq!(share * MAX_NUM_USERS as u64 + remainder, 1_000_000);
    }

    #[test]
    fn test_distribution_share_requires_members() {
        let airdrop = registry(1_000_000);
        let err = airdrop.distribution_share().unwrap_err();
        assert_eq!(error_code(err), u32::from(AirdropError::EmptyUserList));
    }

    #[test]
    fn test_layout_round_trip() {
        let mut airdrop = registry(1_000_000);
        airdrop.authority_bump = 254;
        airdrop.token_mint = Pubkey::new_unique();
        airdrop.add_user(Pubkey::new_unique()).unwrap();

        let mut data = Vec::new();
        airdrop.try_serialize(&mut data).unwrap();
        assert!(data.len() <= Airdrop::LEN);
        assert!(data.starts_with(Airdrop::DISCRIMINATOR));

        let decoded = Airdrop::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.version, AIRDROP_VERSION);
        assert_eq!(decoded.authority_bump, 254);
        assert_eq!(decoded.claim_amount, 1_000_000);
        assert_eq!(decoded.token_mint, airdrop.token_mint);
        assert_eq!(decoded.users(), airdrop.users());
    }
}
