#[cfg(test)]
pub mod test {
    //! Shared declaration fixture: one group with the spread of shapes the
    //! loader and registry tests need — strings with and without defaults,
    //! a rule-carrying string, all three flag configurations, and an
    //! integer. Mirrors what a typical application module declares.

    use crate::group::PropertyGroup;
    use crate::naming::CaseInsensitiveNaming;
    use crate::property::{Property, PropertyHandle};
    use crate::registry::PropertyRegistry;

    pub const GROUP_PATH: &str = "pkg.Group.SimpleParams";

    pub struct SimpleParams {
        pub str_bob: PropertyHandle,
        pub str_null: PropertyHandle,
        pub str_ends_with_xxx: PropertyHandle,
        pub flag_false: PropertyHandle,
        pub flag_true: PropertyHandle,
        pub flag_null: PropertyHandle,
        pub int_null: PropertyHandle,
    }

    impl SimpleParams {
        pub fn declare() -> Self {
            Self {
                str_bob: Property::string()
                    .alias_in("String_Bob")
                    .alias_in_and_out("Stringy.Bob")
                    .default_value("bob")
                    .build(),
                str_null: Property::string().alias_in_and_out("String_Null").build(),
                str_ends_with_xxx: Property::string().must_end_with("XXX").build(),
                flag_false: Property::flag().default_value(false).build(),
                flag_true: Property::flag().default_value(true).build(),
                flag_null: Property::flag().build(),
                int_null: Property::integer().build(),
            }
        }

        pub fn group(&self) -> PropertyGroup {
            PropertyGroup::new(GROUP_PATH)
                .with("STR_BOB", &self.str_bob)
                .with("STR_NULL", &self.str_null)
                .with("STR_ENDS_WITH_XXX", &self.str_ends_with_xxx)
                .with("FLAG_FALSE", &self.flag_false)
                .with("FLAG_TRUE", &self.flag_true)
                .with("FLAG_NULL", &self.flag_null)
                .with("INT_NULL", &self.int_null)
        }
    }

    /// A ready-made registry over the fixture group, case-insensitive
    /// naming, guaranteed conflict-free.
    pub fn registry(params: &SimpleParams) -> PropertyRegistry {
        PropertyRegistry::from_groups(CaseInsensitiveNaming, &[params.group()])
            .expect("fixture group registers cleanly")
    }

    #[test]
    fn fixture_registers_without_conflicts() {
        let params = SimpleParams::declare();
        let reg = registry(&params);
        assert!(reg.naming_conflicts().is_empty());
        assert_eq!(reg.properties().len(), 7);
        assert_eq!(
            reg.canonical_name(&params.str_bob),
            Some("pkg.Group.SimpleParams.STR_BOB")
        );
    }
}
