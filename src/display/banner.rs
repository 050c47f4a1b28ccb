//! Fixed banner text typed out above the profile.

/// First block, typed slowly.
pub const BANNER_INTRO: &str = concat!(
    "\n",
    "           Jonny Jonny Yes Papa eating sugar no papa !! \n",
    "My name is Dipesh. Full time free no job but try to became .........\n",
    "Iam a ......................\n",
    "            ",
);

/// Second block, typed quickly.
pub const BANNER_WELCOME: &str = concat!(
    "\n",
    "   _____  _     _     _    \n",
    "Welcome to my Bio section where you can see my profile \n",
    "  |  \n",
);
