use urin::{
    component::{Authority, Fragment, Port, Query, UserInfo},
    host::Host,
    path::{Path, Segment},
    Scheme,
};

fn main() {
    let http: Scheme = Scheme::with_default_port("http", Port::new(80));
    let urin = http.urin(
        Some(
            Authority::new(Host::registered_name("example.com"))
                .with_user_info(UserInfo::new("hello"))
                .with_port(Port::new(2333)),
        ),
        Path::absolute([Segment::segment("what".to_owned())]),
        Some(Query::new("k=v".to_owned())),
        Some(Fragment::new("title1".to_owned())),
    );
    println!("{urin}");
    println!("{urin:#?}");

    let rel = http.relative_reference(
        None,
        Path::empty(),
        None,
        Some(Fragment::new("fragment".to_owned())),
    );
    println!("{rel}");
    println!("{rel:#?}");
}
