

#[cfg(test)]
mod test {
    use crate::option::IntoOpt;
    use crate::option::Opt;

    #[test]
    fn optional_passes_through() {
        let identity: Opt<i32> = Opt::Present(4).into_opt();
        assert_eq!(identity, Opt::Present(4));

        let absent: Opt<i32> = Opt::<i32>::Absent.into_opt();
        assert_eq!(absent, Opt::Absent);
    }

    #[test]
    fn nullable_collapses() {
        let unwrapped: Opt<i32> = Some(4).into_opt();
        assert_eq!(unwrapped, Opt::Present(4));

        let collapsed: Opt<i32> = None::<i32>.into_opt();
        assert_eq!(collapsed, Opt::Absent);
    }

    #[test]
    fn plain_value_is_present() {
        let wrapped: Opt<i32> = 4.into_opt();
        assert_eq!(wrapped, Opt::Present(4));

        let text: Opt<&str> = "abc".into_opt();
        assert_eq!(text, Opt::Present("abc"));
    }

    struct Handle(u32);

    impl IntoOpt<u32> for Handle {
        fn into_opt(self) -> Opt<u32> {
            if self.0 == 0 {
                return Opt::Absent;
            }
            return Opt::Present(self.0);
        }
    }

    #[test]
    fn foreign_type_opts_in() {
        let live: Opt<u32> = Handle(7).into_opt();
        assert_eq!(live, Opt::Present(7));

        let null: Opt<u32> = Handle(0).into_opt();
        assert_eq!(null, Opt::Absent);
    }
}
